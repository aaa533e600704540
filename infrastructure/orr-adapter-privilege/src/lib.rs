//! 実行権限アダプター
//!
//! プロセストークンの昇格状態を確認する。

use orr_domain::port::driven::PrivilegeCheck;

#[derive(Debug, Default, Clone)]
pub struct PrivilegeAdapter;

impl PrivilegeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeCheck for PrivilegeAdapter {
    fn is_elevated(&self) -> bool {
        is_admin()
    }
}

/// 管理者として昇格済みか（非Windowsでは常に false）
pub fn is_admin() -> bool {
    #[cfg(target_os = "windows")]
    {
        windows_admin::check_admin()
    }
    #[cfg(not(target_os = "windows"))]
    {
        false
    }
}

#[cfg(target_os = "windows")]
mod windows_admin {
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    pub fn check_admin() -> bool {
        unsafe {
            let mut token = HANDLE::default();
            if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token).is_err() {
                return false;
            }

            let mut elevation = TOKEN_ELEVATION::default();
            let mut return_length = 0u32;
            let result = GetTokenInformation(
                token,
                TokenElevation,
                Some(&mut elevation as *mut _ as *mut _),
                std::mem::size_of::<TOKEN_ELEVATION>() as u32,
                &mut return_length,
            );

            let _ = CloseHandle(token);
            result.is_ok() && elevation.TokenIsElevated != 0
        }
    }
}
