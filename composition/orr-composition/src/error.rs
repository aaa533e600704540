//! サマリ行を出せずに終わる失敗（終了コード 1 で扱う）

use std::error::Error;
use std::fmt;

use orr_domain::DomainError;

#[derive(Debug)]
pub enum RunError {
    /// 起動前チェック（管理者権限）の失敗
    Startup(DomainError),
    /// JSONサマリの組み立て失敗
    Summary(serde_json::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Startup(e) => write!(f, "startup check failed: {}", e),
            Self::Summary(e) => write!(f, "failed to serialize summary: {}", e),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Startup(e) => Some(e),
            Self::Summary(e) => Some(e),
        }
    }
}

impl From<DomainError> for RunError {
    fn from(e: DomainError) -> Self {
        Self::Startup(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        Self::Summary(e)
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
