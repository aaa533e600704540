//! 非表示シェル起動ポート
//!
//! アンインストーラーはコマンドシェル経由で同期実行する。
//! タイムアウトはなく、子プロセスが終了するまで呼び出し元はブロックされる。

use crate::error::DomainError;

/// `cmd.exe /c` に渡すコマンドライン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    command_line: String,
}

impl ShellCommand {
    pub fn new(command_line: impl Into<String>) -> Result<Self, DomainError> {
        let command_line = command_line.into();
        if command_line.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "command line must not be empty".into(),
            ));
        }
        Ok(Self { command_line })
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}

/// 非表示シェル起動ポート
pub trait ProcessLauncher {
    /// 非表示ウィンドウで同期実行し、子の終了コードを返す（取得できなければ None）
    fn run_hidden(&self, command: &ShellCommand) -> Result<Option<i32>, DomainError>;
}
