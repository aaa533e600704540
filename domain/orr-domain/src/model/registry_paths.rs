//! 参照するHKLM配下のレジストリパス（すべて64bitビュー）

/// IME Win32Apps のベースキー（直下にユーザーSID、その下にアプリGUID）
pub const WIN32_APPS_BASE: &str = r"SOFTWARE\Microsoft\IntuneManagementExtension\Win32Apps";

/// Win32Apps 配下でアプリGUIDではない予約キー
pub const WIN32_APPS_RESERVED_KEY: &str = "GRS";

/// アプリ毎の実行状態
pub const ENFORCEMENT_STATE_VALUE: &str = "EnforcementState";

/// アンインストール登録のベースキー
pub const UNINSTALL_BASE: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall";

/// リテール版のアンインストールキー名の接頭辞（後ろにロケールが付く）
pub const RETAIL_KEY_PREFIX: &str = "O365HomePremRetail - ";

pub const UNINSTALL_STRING_VALUE: &str = "UninstallString";

/// OSインストール情報のキー
pub const OS_CURRENT_VERSION: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

/// OSインストール日時（エポック秒、REG_DWORD）
pub const INSTALL_DATE_VALUE: &str = "InstallDate";
