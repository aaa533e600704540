//! ポートのインメモリ実装（engine / app のテスト用）

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::error::DomainError;
use crate::model::Locale;
use crate::model::registry_paths::{
    ENFORCEMENT_STATE_VALUE, UNINSTALL_BASE, UNINSTALL_STRING_VALUE, WIN32_APPS_BASE,
};
use crate::port::driven::{
    Clock, PrivilegeCheck, ProcessLauncher, RegistryReader, ShellCommand, Sleeper,
};

/// HKLM 相対パスで引くレジストリ。読み取ったパスを順に記録する。
#[derive(Default)]
pub struct MemoryRegistry {
    keys: BTreeSet<String>,
    dwords: BTreeMap<(String, String), u32>,
    strings: BTreeMap<(String, String), String>,
    failing_keys: BTreeSet<String>,
    failing_values: BTreeSet<(String, String)>,
    reads: RefCell<Vec<String>>,
}

impl MemoryRegistry {
    /// 指定したリテール版キーを持つレジストリ（UninstallString なし）
    pub fn with_retail_keys(locales: &[Locale]) -> Self {
        let mut registry = Self::default();
        registry.add_key(UNINSTALL_BASE);
        for locale in locales {
            registry.install_retail(*locale, None);
        }
        registry
    }

    /// 途中の親キーもすべて作る
    pub fn add_key(&mut self, path: &str) {
        let mut current = String::new();
        for part in path.split('\\') {
            if !current.is_empty() {
                current.push('\\');
            }
            current.push_str(part);
            self.keys.insert(current.clone());
        }
    }

    pub fn set_dword(&mut self, path: &str, name: &str, value: u32) {
        self.add_key(path);
        self.dwords.insert((path.into(), name.into()), value);
    }

    pub fn set_string(&mut self, path: &str, name: &str, value: &str) {
        self.add_key(path);
        self.strings
            .insert((path.into(), name.into()), value.into());
    }

    pub fn install_retail(&mut self, locale: Locale, uninstall_string: Option<&str>) {
        let path = locale.retail_key_path();
        self.add_key(&path);
        if let Some(value) = uninstall_string {
            self.set_string(&path, UNINSTALL_STRING_VALUE, value);
        }
    }

    pub fn set_enforcement_state(&mut self, sid: &str, app: &str, state: u32) {
        self.set_dword(&win32_app_path(sid, app), ENFORCEMENT_STATE_VALUE, state);
    }

    /// このキーへのアクセスはすべて `RegistryAccessError`
    pub fn fail_key(&mut self, path: &str) {
        self.failing_keys.insert(path.into());
    }

    /// この値の読み取りだけ `RegistryAccessError`
    pub fn fail_value(&mut self, path: &str, name: &str) {
        self.failing_values.insert((path.into(), name.into()));
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    fn touch(&self, path: &str) -> Result<(), DomainError> {
        self.reads.borrow_mut().push(path.to_string());
        if self.failing_keys.contains(path) {
            return Err(DomainError::RegistryAccessError(format!(
                "access denied: {}",
                path
            )));
        }
        Ok(())
    }

    fn touch_value(&self, path: &str, name: &str) -> Result<(), DomainError> {
        self.touch(path)?;
        if self
            .failing_values
            .contains(&(path.to_string(), name.to_string()))
        {
            return Err(DomainError::RegistryAccessError(format!(
                "access denied: {}\\{}",
                path, name
            )));
        }
        Ok(())
    }
}

impl RegistryReader for MemoryRegistry {
    fn key_exists(&self, path: &str) -> Result<bool, DomainError> {
        self.touch(path)?;
        Ok(self.keys.contains(path))
    }

    fn subkey_names(&self, path: &str) -> Result<Vec<String>, DomainError> {
        self.touch(path)?;
        let prefix = format!("{}\\", path);
        Ok(self
            .keys
            .iter()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('\\'))
            .map(str::to_string)
            .collect())
    }

    fn read_dword(&self, path: &str, name: &str) -> Result<Option<u32>, DomainError> {
        self.touch_value(path, name)?;
        Ok(self.dwords.get(&(path.into(), name.into())).copied())
    }

    fn read_string(&self, path: &str, name: &str) -> Result<Option<String>, DomainError> {
        self.touch_value(path, name)?;
        Ok(self.strings.get(&(path.into(), name.into())).cloned())
    }
}

/// `Win32Apps\<SID>\<GUID>`
pub fn win32_app_path(sid: &str, app: &str) -> String {
    format!(r"{}\{}\{}", WIN32_APPS_BASE, sid, app)
}

pub struct FixedPrivilege(pub bool);

impl PrivilegeCheck for FixedPrivilege {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

/// 起動したコマンドラインを記録する。`failing()` は常に起動失敗。
#[derive(Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn run_hidden(&self, command: &ShellCommand) -> Result<Option<i32>, DomainError> {
        if self.fail {
            return Err(DomainError::ProcessLaunchFailed("cmd.exe not found".into()));
        }
        self.launched
            .borrow_mut()
            .push(command.command_line().to_string());
        Ok(Some(0))
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    slept: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

/// 固定時刻。サマリ用タイムスタンプも同じ時刻の UTC 表記。
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> i64 {
        self.0
    }

    fn now_timestamp(&self) -> String {
        crate::service::time_format::format_unix_utc(self.0)
    }
}
