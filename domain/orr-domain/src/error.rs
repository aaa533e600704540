//! ドメインエラー型
//!
//! 標準ライブラリのみ使用（外部エラーハンドリングクレートなし）

use std::fmt;

/// ドメイン層のエラー型
/// 各バリアントは特定の失敗シナリオを表現
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 管理者権限なし（起動前チェック）
    InsufficientPrivileges(String),

    /// レジストリサブシステムの予期しない失敗
    RegistryAccessError(String),

    /// OSインストール日時の値が存在しない
    MissingInstallDate,

    /// アンインストールループ中の失敗（ロケールと原因を保持）
    UninstallError {
        locale: String,
        cause: Box<DomainError>,
    },

    /// プロセス起動失敗
    ProcessLaunchFailed(String),

    /// バリデーションエラー
    ValidationError(String),
}

impl DomainError {
    /// アンインストール失敗としてラップする
    pub fn uninstall(locale: impl Into<String>, cause: DomainError) -> Self {
        Self::UninstallError {
            locale: locale.into(),
            cause: Box::new(cause),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPrivileges(msg) => {
                write!(f, "Insufficient privileges: {}", msg)
            }
            Self::RegistryAccessError(msg) => {
                write!(f, "Registry access error: {}", msg)
            }
            Self::MissingInstallDate => {
                write!(f, "OS InstallDate value is missing")
            }
            Self::UninstallError { locale, cause } => {
                write!(f, "Uninstall failed for {}: {}", locale, cause)
            }
            Self::ProcessLaunchFailed(msg) => {
                write!(f, "Process launch failed: {}", msg)
            }
            Self::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}
