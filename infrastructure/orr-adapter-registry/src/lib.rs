//! Windows レジストリ読み取りアダプター
//!
//! HKLM 配下（64bitビュー固定）のキー存在確認・サブキー列挙・値読み取りのみを行う。
//! 書き込みは一切しない（変更はアンインストーラー自身が行う）。

use orr_domain::DomainError;
use orr_domain::port::driven::RegistryReader;

/// プラットフォーム中立のハンドル
#[cfg(windows)]
pub type RegistryAdapter = WindowsRegistryAdapter;
#[cfg(not(windows))]
pub type RegistryAdapter = NonWindowsRegistryAdapter;

#[cfg(windows)]
#[derive(Debug, Default, Clone)]
pub struct WindowsRegistryAdapter;

#[cfg(windows)]
impl WindowsRegistryAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
impl RegistryReader for WindowsRegistryAdapter {
    fn key_exists(&self, path: &str) -> Result<bool, DomainError> {
        windows_impl::key_exists(path)
    }

    fn subkey_names(&self, path: &str) -> Result<Vec<String>, DomainError> {
        windows_impl::subkey_names(path)
    }

    fn read_dword(&self, path: &str, name: &str) -> Result<Option<u32>, DomainError> {
        windows_impl::read_dword(path, name)
    }

    fn read_string(&self, path: &str, name: &str) -> Result<Option<String>, DomainError> {
        windows_impl::read_string(path, name)
    }
}

/// 非Windows環境では空のレジストリとして振る舞う
#[cfg(not(windows))]
#[derive(Debug, Default, Clone)]
pub struct NonWindowsRegistryAdapter;

#[cfg(not(windows))]
impl NonWindowsRegistryAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl RegistryReader for NonWindowsRegistryAdapter {
    fn key_exists(&self, _path: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    fn subkey_names(&self, _path: &str) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    fn read_dword(&self, _path: &str, _name: &str) -> Result<Option<u32>, DomainError> {
        Ok(None)
    }

    fn read_string(&self, _path: &str, _name: &str) -> Result<Option<String>, DomainError> {
        Ok(None)
    }
}

#[cfg(windows)]
mod windows_impl {
    use super::*;
    use windows::Win32::Foundation::{
        ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, ERROR_PATH_NOT_FOUND,
        ERROR_SUCCESS, ERROR_UNSUPPORTED_TYPE, WIN32_ERROR,
    };
    use windows::Win32::System::Registry::{
        HKEY, HKEY_LOCAL_MACHINE, KEY_ENUMERATE_SUB_KEYS, KEY_QUERY_VALUE, KEY_WOW64_64KEY,
        REG_SAM_FLAGS, RRF_RT_REG_DWORD, RRF_RT_REG_SZ, RegCloseKey, RegEnumKeyExW,
        RegGetValueW, RegOpenKeyExW,
    };
    use windows::core::{PCWSTR, PWSTR};

    /// レジストリキー名の最大長（255文字＋終端）
    const MAX_KEY_NAME: usize = 256;

    /// スコープ終了で RegCloseKey する
    struct OpenKey(HKEY);

    impl Drop for OpenKey {
        fn drop(&mut self) {
            let _ = unsafe { RegCloseKey(self.0) };
        }
    }

    pub fn key_exists(path: &str) -> Result<bool, DomainError> {
        Ok(open_key(path, KEY_QUERY_VALUE)?.is_some())
    }

    pub fn subkey_names(path: &str) -> Result<Vec<String>, DomainError> {
        let Some(key) = open_key(path, KEY_ENUMERATE_SUB_KEYS | KEY_QUERY_VALUE)? else {
            return Ok(Vec::new()); // キーが存在しない
        };

        let mut names = Vec::new();
        let mut index: u32 = 0;
        let mut name_buf: [u16; MAX_KEY_NAME] = [0; MAX_KEY_NAME];

        loop {
            let mut name_len = name_buf.len() as u32;
            let status = unsafe {
                RegEnumKeyExW(
                    key.0,
                    index,
                    Some(PWSTR(name_buf.as_mut_ptr())),
                    &mut name_len,
                    None, // 予約
                    None, // クラス
                    None, // クラス長
                    None, // 最終書き込み時刻
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break; // サブキー終了
            }
            if status != ERROR_SUCCESS {
                return Err(map_win32_error(status, path));
            }
            names.push(String::from_utf16_lossy(&name_buf[..name_len as usize]));
            index += 1;
        }

        Ok(names)
    }

    pub fn read_dword(path: &str, name: &str) -> Result<Option<u32>, DomainError> {
        let Some(key) = open_key(path, KEY_QUERY_VALUE)? else {
            return Ok(None);
        };
        let name_w = to_wide(name); // API呼び出し中にVecを生存させる
        let mut value: u32 = 0;
        let mut size = std::mem::size_of::<u32>() as u32;
        let status = unsafe {
            RegGetValueW(
                key.0,
                PCWSTR::null(),
                PCWSTR(name_w.as_ptr()),
                RRF_RT_REG_DWORD,
                None,
                Some(&mut value as *mut _ as *mut _),
                Some(&mut size),
            )
        };
        match status {
            s if s == ERROR_SUCCESS => Ok(Some(value)),
            // 値なし・型違いは「値なし」扱い
            s if is_missing(s) || s == ERROR_UNSUPPORTED_TYPE => Ok(None),
            s => Err(map_win32_error(s, &format!(r"{}\{}", path, name))),
        }
    }

    pub fn read_string(path: &str, name: &str) -> Result<Option<String>, DomainError> {
        let Some(key) = open_key(path, KEY_QUERY_VALUE)? else {
            return Ok(None);
        };
        let name_w = to_wide(name);
        let value_path = format!(r"{}\{}", path, name);

        // 1回目: 必要サイズ取得（REG_EXPAND_SZ は展開後のサイズ）
        let mut size_bytes: u32 = 0;
        let status = unsafe {
            RegGetValueW(
                key.0,
                PCWSTR::null(),
                PCWSTR(name_w.as_ptr()),
                RRF_RT_REG_SZ,
                None,
                None,
                Some(&mut size_bytes),
            )
        };
        if is_missing(status) || status == ERROR_UNSUPPORTED_TYPE {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(map_win32_error(status, &value_path));
        }

        let mut buffer: Vec<u16> = vec![0u16; (size_bytes as usize / 2).max(1)];
        let status = unsafe {
            RegGetValueW(
                key.0,
                PCWSTR::null(),
                PCWSTR(name_w.as_ptr()),
                RRF_RT_REG_SZ,
                None,
                Some(buffer.as_mut_ptr() as *mut _),
                Some(&mut size_bytes),
            )
        };
        if is_missing(status) {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(map_win32_error(status, &value_path));
        }

        // size_bytesは終端nullを含むため適切に切り詰める
        let char_len = (size_bytes as usize / 2).saturating_sub(1);
        buffer.truncate(char_len);
        Ok(Some(String::from_utf16_lossy(&buffer)))
    }

    /// キーを開く。存在しなければ None。
    fn open_key(path: &str, access: REG_SAM_FLAGS) -> Result<Option<OpenKey>, DomainError> {
        let wide_path = to_wide(path); // API呼び出し中にVecを生存させる
        let mut key: HKEY = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_LOCAL_MACHINE,
                PCWSTR(wide_path.as_ptr()),
                Some(0),
                access | KEY_WOW64_64KEY,
                &mut key,
            )
        };
        if status == ERROR_SUCCESS {
            return Ok(Some(OpenKey(key)));
        }
        if is_missing(status) {
            return Ok(None);
        }
        Err(map_win32_error(status, path))
    }

    fn is_missing(status: WIN32_ERROR) -> bool {
        status == ERROR_FILE_NOT_FOUND || status == ERROR_PATH_NOT_FOUND
    }

    fn to_wide(s: &str) -> Vec<u16> {
        let mut wide: Vec<u16> = s.encode_utf16().collect();
        wide.push(0);
        wide
    }

    fn map_win32_error(status: WIN32_ERROR, path: &str) -> DomainError {
        if status == ERROR_ACCESS_DENIED {
            return DomainError::RegistryAccessError(format!(
                r"access denied for HKLM\{}",
                path
            ));
        }
        DomainError::RegistryAccessError(format!(
            r"registry error for HKLM\{}: status={}",
            path, status.0
        ))
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use orr_domain::model::Locale;
    use orr_domain::model::registry_paths::WIN32_APPS_BASE;

    #[test]
    fn non_windows_adapter_is_an_empty_registry() {
        let adapter = RegistryAdapter::new();
        assert!(!adapter.key_exists(&Locale::EnUs.retail_key_path()).unwrap());
        assert!(adapter.subkey_names(WIN32_APPS_BASE).unwrap().is_empty());
        assert_eq!(adapter.read_dword("x", "y").unwrap(), None);
        assert_eq!(adapter.read_string("x", "y").unwrap(), None);
    }
}

#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;

    const SESSION_ENVIRONMENT: &str =
        r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

    #[test]
    fn expand_sz_value_is_returned_expanded() {
        // Path は REG_EXPAND_SZ で %SystemRoot% を含む
        let path = RegistryAdapter::new()
            .read_string(SESSION_ENVIRONMENT, "Path")
            .unwrap()
            .unwrap_or_default();
        assert!(!path.is_empty());
        assert!(!path.to_ascii_lowercase().contains("%systemroot%"), "{path}");
    }

    #[test]
    fn missing_key_and_value_are_not_errors() {
        let adapter = RegistryAdapter::new();
        assert!(!adapter.key_exists(r"SOFTWARE\orr-missing-key").unwrap());
        assert!(adapter.subkey_names(r"SOFTWARE\orr-missing-key").unwrap().is_empty());
        assert_eq!(
            adapter
                .read_dword(SESSION_ENVIRONMENT, "orr-missing-value")
                .unwrap(),
            None
        );
    }
}
