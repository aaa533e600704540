//! 除去ユースケース
//!
//! 管理者チェック → IMEビジー判定 → 検出 → サイレントアンインストール。

use orr_domain::DomainError;
use orr_domain::model::{RunOutcome, join_locales};
use orr_domain::port::driven::{PrivilegeCheck, ProcessLauncher, RegistryReader, Sleeper};
use orr_domain::service::ensure_admin;
use orr_engine::{
    UninstallOptions, detect_retail_installations, is_agent_busy, uninstall_retail,
};

use crate::NOT_DETECTED_MESSAGE;

pub const AGENT_BUSY_MESSAGE: &str =
    "Intune Management Extension is installing an application; retry later";

#[derive(Clone, Debug, Default)]
pub struct RemovalOptions {
    /// 検出まで行い、アンインストーラーは起動しない
    pub dry_run: bool,
    pub logger: Option<fn(&str)>,
}

pub struct RemovalDeps<'a> {
    pub privilege: &'a dyn PrivilegeCheck,
    pub registry: &'a dyn RegistryReader,
    pub launcher: &'a dyn ProcessLauncher,
    pub sleeper: &'a dyn Sleeper,
}

pub struct RemovalService<'a> {
    deps: RemovalDeps<'a>,
}

impl<'a> RemovalService<'a> {
    pub fn new(deps: RemovalDeps<'a>) -> Self {
        Self { deps }
    }

    /// 権限不足のみ `Err` で返す（起動前エラー）。
    /// それ以降の失敗はすべて終了コード 1 の `RunOutcome` に畳み込む。
    pub fn run(&self, options: &RemovalOptions) -> Result<RunOutcome, DomainError> {
        ensure_admin(self.deps.privilege)?;
        Ok(match self.remediate(options) {
            Ok(outcome) => outcome,
            Err(err) => RunOutcome::failure(err.to_string()),
        })
    }

    fn remediate(&self, options: &RemovalOptions) -> Result<RunOutcome, DomainError> {
        if is_agent_busy(self.deps.registry)? {
            log(options, "IME busy; deferring to next run");
            return Ok(RunOutcome::failure(AGENT_BUSY_MESSAGE));
        }

        let locales = detect_retail_installations(self.deps.registry)?;
        if locales.is_empty() {
            return Ok(RunOutcome::success(NOT_DETECTED_MESSAGE));
        }
        let detected = join_locales(&locales);
        log(options, &format!("detected: {}", detected));

        let report = uninstall_retail(
            self.deps.registry,
            self.deps.launcher,
            self.deps.sleeper,
            &locales,
            &UninstallOptions {
                dry_run: options.dry_run,
                logger: options.logger,
                ..UninstallOptions::default()
            },
        )?;

        if options.dry_run {
            return Ok(RunOutcome::success(format!(
                "Office 365 retail detected: {} (dry run, {} uninstall command(s) not executed)",
                detected,
                report.commands.len()
            )));
        }
        if report.skipped.is_empty() {
            return Ok(RunOutcome::success(format!(
                "Office 365 retail detected and uninstalled: {}",
                detected
            )));
        }

        // UninstallString が無いロケールは「アンインストール済み」と書かない
        let skipped = join_locales(&report.skipped);
        log(options, &format!("no UninstallString: {}", skipped));
        let launched = if report.uninstalled.is_empty() {
            "none".to_string()
        } else {
            join_locales(&report.uninstalled)
        };
        Ok(RunOutcome::success(format!(
            "Office 365 retail detected: {}; uninstaller launched for {}; no UninstallString for {}",
            detected, launched, skipped
        )))
    }
}

fn log(options: &RemovalOptions, message: &str) {
    if let Some(logger) = options.logger {
        logger(message);
    }
}
