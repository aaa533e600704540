//! アンインストールコマンドの組み立て

use crate::port::driven::ShellCommand;

/// サイレントアンインストール用に末尾へ付ける引数
pub const SILENT_FLAG: &str = "DisplayLevel=False";

/// UninstallString にサイレント引数を付けたコマンドを返す。
/// 空白のみの場合は None（スキップ対象）。
pub fn silent_uninstall_command(uninstall_string: &str) -> Option<ShellCommand> {
    let trimmed = uninstall_string.trim();
    if trimmed.is_empty() {
        return None;
    }
    ShellCommand::new(format!("{} {}", trimmed, SILENT_FLAG)).ok()
}
