//! orr-engine: リテール版検出／IMEビジー判定／OS経過時間判定／サイレント
//! アンインストールのワークフローを実装する層。ドメイン（orr-domain）のポートにのみ依存する。

use std::time::Duration;

use orr_domain::DomainError;
use orr_domain::model::registry_paths::{
    ENFORCEMENT_STATE_VALUE, INSTALL_DATE_VALUE, OS_CURRENT_VERSION, UNINSTALL_STRING_VALUE,
    WIN32_APPS_BASE, WIN32_APPS_RESERVED_KEY,
};
use orr_domain::model::{EnforcementState, HoursThreshold, InstallDateRecord, Locale};
use orr_domain::port::driven::{Clock, ProcessLauncher, RegistryReader, Sleeper};
use orr_domain::service::{evaluate_install_age, silent_uninstall_command};

/// アンインストーラー終了後の固定待ち時間
pub const UNINSTALL_PAUSE: Duration = Duration::from_secs(5);

/// 固定表の順にリテール版のアンインストールキーを探す
/// 存在したロケールのみを表の順序で返す（空なら未インストール）
pub fn detect_retail_installations(
    registry: &dyn RegistryReader,
) -> Result<Vec<Locale>, DomainError> {
    let mut found = Vec::new();
    for locale in Locale::all() {
        if registry.key_exists(&locale.retail_key_path())? {
            found.push(*locale);
        }
    }
    Ok(found)
}

/// IMEがWin32アプリのインストール中か
///
/// Win32Apps\<SID>\<GUID>\EnforcementState を走査し、1003/2000 を見つけた時点で打ち切る。
/// 値が無いGUIDは不一致として扱う。
pub fn is_agent_busy(registry: &dyn RegistryReader) -> Result<bool, DomainError> {
    for sid in registry.subkey_names(WIN32_APPS_BASE)? {
        let sid_path = format!(r"{}\{}", WIN32_APPS_BASE, sid);
        for app in registry.subkey_names(&sid_path)? {
            if app.eq_ignore_ascii_case(WIN32_APPS_RESERVED_KEY) {
                continue;
            }
            let app_path = format!(r"{}\{}", sid_path, app);
            let state = registry.read_dword(&app_path, ENFORCEMENT_STATE_VALUE)?;
            if state.map(EnforcementState::new).is_some_and(|s| s.is_busy()) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// OSインストール日時を読み、しきい値以内かを判定
pub fn check_os_install_age(
    registry: &dyn RegistryReader,
    clock: &dyn Clock,
    threshold: HoursThreshold,
) -> Result<InstallDateRecord, DomainError> {
    let installed_at = registry
        .read_dword(OS_CURRENT_VERSION, INSTALL_DATE_VALUE)?
        .ok_or(DomainError::MissingInstallDate)?;
    Ok(evaluate_install_age(
        i64::from(installed_at),
        clock.now_unix_secs(),
        threshold,
    ))
}

/// アンインストールの実行オプション
#[derive(Clone, Debug)]
pub struct UninstallOptions {
    /// 各アンインストーラー終了後の待ち時間
    pub pause: Duration,
    /// true ならコマンドを組み立てるだけで起動しない
    pub dry_run: bool,
    pub logger: Option<fn(&str)>,
}

impl Default for UninstallOptions {
    fn default() -> Self {
        Self {
            pause: UNINSTALL_PAUSE,
            dry_run: false,
            logger: None,
        }
    }
}

/// アンインストール結果の要約
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    pub uninstalled: Vec<Locale>, // アンインストーラーを実行したロケール
    pub skipped: Vec<Locale>,     // UninstallString が無かったロケール
    pub commands: Vec<String>,    // 実行（dry_run では予定）したコマンドライン
}

/// 検出済みロケールを順にサイレントアンインストールする
///
/// UninstallString が無いロケールは黙ってスキップ。
/// 読み取り失敗・起動失敗は `UninstallError` で即中断し、残りは試行しない。
/// 子プロセスの終了コードは確認しない。
pub fn uninstall_retail(
    registry: &dyn RegistryReader,
    launcher: &dyn ProcessLauncher,
    sleeper: &dyn Sleeper,
    locales: &[Locale],
    options: &UninstallOptions,
) -> Result<UninstallReport, DomainError> {
    let mut report = UninstallReport::default();

    for locale in locales {
        let uninstall_string = registry
            .read_string(&locale.retail_key_path(), UNINSTALL_STRING_VALUE)
            .map_err(|e| DomainError::uninstall(locale.code(), e))?;

        let Some(command) = uninstall_string
            .as_deref()
            .and_then(silent_uninstall_command)
        else {
            report.skipped.push(*locale);
            continue;
        };

        log(options, &format!("{}: {}", locale, command.command_line()));
        report.commands.push(command.command_line().to_string());
        if options.dry_run {
            continue;
        }

        let exit_code = launcher
            .run_hidden(&command)
            .map_err(|e| DomainError::uninstall(locale.code(), e))?;
        if let Some(code) = exit_code {
            log(options, &format!("{}: uninstaller exited with {}", locale, code));
        }
        report.uninstalled.push(*locale);
        sleeper.sleep(options.pause);
    }

    Ok(report)
}

fn log(options: &UninstallOptions, message: &str) {
    if let Some(logger) = options.logger {
        logger(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orr_domain::model::registry_paths::UNINSTALL_BASE;
    use orr_domain::testing::{
        FixedClock, MemoryRegistry, RecordingLauncher, RecordingSleeper, win32_app_path,
    };

    #[test]
    fn detector_returns_subsets_in_table_order() {
        let all = Locale::all();
        // ビットマスクで代表的な部分集合を作る
        for mask in [0u32, 1, 0b101, 0x1FF_FFFF, 0x155_5555, 0x100_0001, 0b1_0000_0110] {
            let expected: Vec<Locale> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u32 << *i) != 0)
                .map(|(_, l)| *l)
                .collect();
            // 逆順に登録しても結果は表の順序
            let mut reversed = expected.clone();
            reversed.reverse();
            let reg = MemoryRegistry::with_retail_keys(&reversed);
            assert_eq!(
                detect_retail_installations(&reg).unwrap(),
                expected,
                "mask={mask:#x}"
            );
        }
    }

    #[test]
    fn detector_ignores_other_products() {
        let mut reg = MemoryRegistry::default();
        reg.add_key(&format!(r"{}\O365ProPlusRetail - en-us", UNINSTALL_BASE));
        reg.add_key(&format!(r"{}\O365HomePremRetail", UNINSTALL_BASE));
        assert!(detect_retail_installations(&reg).unwrap().is_empty());
    }

    #[test]
    fn detector_propagates_registry_failure() {
        let mut reg = MemoryRegistry::with_retail_keys(&[Locale::EnUs]);
        reg.fail_key(&Locale::DeDe.retail_key_path());
        assert!(matches!(
            detect_retail_installations(&reg),
            Err(DomainError::RegistryAccessError(_))
        ));
    }

    #[test]
    fn busy_check_empty_tree_is_not_busy() {
        let reg = MemoryRegistry::default();
        assert!(!is_agent_busy(&reg).unwrap());

        let mut reg = MemoryRegistry::default();
        reg.add_key(&format!(r"{}\S-1-5-18", WIN32_APPS_BASE));
        assert!(!is_agent_busy(&reg).unwrap());
    }

    #[test]
    fn busy_check_detects_1003_and_2000() {
        for code in [1003, 2000] {
            let mut reg = MemoryRegistry::default();
            reg.set_enforcement_state("S-1-5-18", "0b6e7e1a-1111-4c2b-9a6b-000000000001", 1000);
            reg.set_enforcement_state("S-1-12-1-99", "0b6e7e1a-1111-4c2b-9a6b-000000000002", code);
            assert!(is_agent_busy(&reg).unwrap(), "code={code}");
        }
    }

    #[test]
    fn busy_check_ignores_other_codes_and_missing_values() {
        let mut reg = MemoryRegistry::default();
        reg.set_enforcement_state("S-1-5-18", "app-a", 1000);
        reg.set_enforcement_state("S-1-5-18", "app-b", 5000);
        reg.add_key(&win32_app_path("S-1-5-18", "app-c"));
        reg.set_string(&win32_app_path("S-1-5-18", "app-d"), ENFORCEMENT_STATE_VALUE, "2000");
        assert!(!is_agent_busy(&reg).unwrap());
    }

    #[test]
    fn busy_check_skips_grs_key() {
        let mut reg = MemoryRegistry::default();
        reg.set_enforcement_state("S-1-5-18", "GRS", 2000);
        reg.set_enforcement_state("S-1-5-18", "grs", 1003);
        assert!(!is_agent_busy(&reg).unwrap());
    }

    #[test]
    fn busy_check_short_circuits_on_first_match() {
        let mut reg = MemoryRegistry::default();
        reg.set_enforcement_state("S-1", "a", 2000);
        reg.set_enforcement_state("S-2", "b", 0);
        // 2つ目のSIDに到達すれば失敗する
        reg.fail_key(&format!(r"{}\S-2", WIN32_APPS_BASE));
        assert!(is_agent_busy(&reg).unwrap());
        assert!(!reg.reads().iter().any(|p| p.ends_with(r"\S-2")));
    }

    #[test]
    fn busy_check_propagates_sid_enumeration_fault() {
        let mut reg = MemoryRegistry::default();
        reg.set_enforcement_state("S-1-5-18", "app-a", 1000);
        reg.fail_key(&format!(r"{}\S-1-5-18", WIN32_APPS_BASE));
        match is_agent_busy(&reg) {
            Err(DomainError::RegistryAccessError(msg)) => assert!(msg.contains("S-1-5-18")),
            other => panic!("expected registry access error, got {:?}", other),
        }
    }

    #[test]
    fn busy_check_propagates_enforcement_state_read_fault() {
        let mut reg = MemoryRegistry::default();
        reg.set_enforcement_state("S-1-5-18", "app-a", 1000);
        reg.set_enforcement_state("S-1-5-18", "app-b", 2000);
        reg.fail_value(&win32_app_path("S-1-5-18", "app-a"), ENFORCEMENT_STATE_VALUE);
        // 読めない値は「不一致」ではなくエラー
        assert!(matches!(
            is_agent_busy(&reg),
            Err(DomainError::RegistryAccessError(_))
        ));
    }

    #[test]
    fn os_age_within_and_outside_threshold() {
        let t: i64 = 1_760_000_000;
        let mut reg = MemoryRegistry::default();
        reg.set_dword(OS_CURRENT_VERSION, INSTALL_DATE_VALUE, t as u32);

        let record =
            check_os_install_age(&reg, &FixedClock(t + 2 * 3_600), HoursThreshold::default())
                .unwrap();
        assert!(record.is_within_threshold());
        assert_eq!(record.installed_at(), t);

        let record =
            check_os_install_age(&reg, &FixedClock(t + 24 * 3_600), HoursThreshold::default())
                .unwrap();
        assert!(record.is_within_threshold());

        let record =
            check_os_install_age(&reg, &FixedClock(t + 48 * 3_600), HoursThreshold::default())
                .unwrap();
        assert!(!record.is_within_threshold());
    }

    #[test]
    fn os_age_missing_value_is_error() {
        let reg = MemoryRegistry::default();
        assert_eq!(
            check_os_install_age(&reg, &FixedClock(0), HoursThreshold::default()),
            Err(DomainError::MissingInstallDate)
        );
    }

    #[test]
    fn uninstall_skips_locale_without_uninstall_string() {
        let mut reg = MemoryRegistry::with_retail_keys(&[Locale::EnUs, Locale::FrFr]);
        reg.set_string(
            &Locale::EnUs.retail_key_path(),
            UNINSTALL_STRING_VALUE,
            r#""C:\Program Files\Common Files\microsoft shared\ClickToRun\OfficeClickToRun.exe" scenario=install culture=en-us"#,
        );
        let launcher = RecordingLauncher::default();
        let sleeper = RecordingSleeper::default();

        let report = uninstall_retail(
            &reg,
            &launcher,
            &sleeper,
            &[Locale::EnUs, Locale::FrFr],
            &UninstallOptions::default(),
        )
        .unwrap();

        let launched = launcher.launched();
        assert_eq!(launched.len(), 1);
        assert!(launched[0].ends_with("culture=en-us DisplayLevel=False"));
        assert_eq!(report.uninstalled, vec![Locale::EnUs]);
        assert_eq!(report.skipped, vec![Locale::FrFr]);
        assert_eq!(sleeper.slept(), vec![UNINSTALL_PAUSE]);
    }

    #[test]
    fn uninstall_runs_in_order_and_pauses_after_each() {
        let mut reg = MemoryRegistry::default();
        reg.install_retail(Locale::EnUs, Some("a.exe en"));
        reg.install_retail(Locale::FrFr, Some("a.exe fr"));
        let launcher = RecordingLauncher::default();
        let sleeper = RecordingSleeper::default();

        uninstall_retail(
            &reg,
            &launcher,
            &sleeper,
            &[Locale::EnUs, Locale::FrFr],
            &UninstallOptions::default(),
        )
        .unwrap();

        assert_eq!(
            launcher.launched(),
            vec![
                "a.exe en DisplayLevel=False".to_string(),
                "a.exe fr DisplayLevel=False".to_string()
            ]
        );
        assert_eq!(sleeper.slept().len(), 2);
    }

    #[test]
    fn uninstall_read_failure_aborts_remaining_locales() {
        let mut reg = MemoryRegistry::with_retail_keys(&[Locale::FrFr]);
        reg.install_retail(Locale::EnUs, Some("a.exe en"));
        reg.install_retail(Locale::DeDe, Some("a.exe de"));
        reg.fail_key(&Locale::FrFr.retail_key_path());
        let launcher = RecordingLauncher::default();
        let sleeper = RecordingSleeper::default();

        let result = uninstall_retail(
            &reg,
            &launcher,
            &sleeper,
            &[Locale::EnUs, Locale::FrFr, Locale::DeDe],
            &UninstallOptions::default(),
        );

        match result {
            Err(DomainError::UninstallError { locale, cause }) => {
                assert_eq!(locale, "fr-FR");
                assert!(matches!(*cause, DomainError::RegistryAccessError(_)));
            }
            other => panic!("expected uninstall error, got {:?}", other),
        }
        assert_eq!(launcher.launched(), vec!["a.exe en DisplayLevel=False".to_string()]);
    }

    #[test]
    fn uninstall_launch_failure_is_wrapped() {
        let mut reg = MemoryRegistry::default();
        reg.install_retail(Locale::JaJp, Some("a.exe ja"));
        let launcher = RecordingLauncher::failing();
        let sleeper = RecordingSleeper::default();

        let err = uninstall_retail(
            &reg,
            &launcher,
            &sleeper,
            &[Locale::JaJp],
            &UninstallOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::uninstall(
                "ja-JP",
                DomainError::ProcessLaunchFailed("cmd.exe not found".into())
            )
        );
        assert!(sleeper.slept().is_empty());
    }

    #[test]
    fn uninstall_dry_run_spawns_nothing() {
        let mut reg = MemoryRegistry::default();
        reg.install_retail(Locale::EnUs, Some("a.exe en"));
        let launcher = RecordingLauncher::default();
        let sleeper = RecordingSleeper::default();

        let report = uninstall_retail(
            &reg,
            &launcher,
            &sleeper,
            &[Locale::EnUs],
            &UninstallOptions {
                dry_run: true,
                ..UninstallOptions::default()
            },
        )
        .unwrap();

        assert!(launcher.launched().is_empty());
        assert!(sleeper.slept().is_empty());
        assert!(report.uninstalled.is_empty());
        assert_eq!(report.commands, vec!["a.exe en DisplayLevel=False".to_string()]);
    }
}
