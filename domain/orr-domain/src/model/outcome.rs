//! 判定フローの結果
//!
//! フローはプロセスを終了せず、この値を返す。終了はエントリポイントが1回だけ行う。

use super::exit_codes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub status_code: i32,
    pub message: String,
}

impl RunOutcome {
    pub fn new(status_code: i32, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(exit_codes::SUCCESS, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(exit_codes::FAILURE, message)
    }
}
