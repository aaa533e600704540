//! 非表示シェル起動アダプター
//!
//! `cmd.exe /c <command line>` をウィンドウなしで同期実行する。
//! 出力は捕捉せず破棄する（コンソールにはサマリ1行のみを出す）。

use std::process::{Command, Stdio};

use orr_domain::DomainError;
use orr_domain::port::driven::{ProcessLauncher, ShellCommand};

#[derive(Debug, Default, Clone)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for ShellLauncher {
    fn run_hidden(&self, command: &ShellCommand) -> Result<Option<i32>, DomainError> {
        let mut cmd = shell_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let status = cmd
            .status()
            .map_err(|e| DomainError::ProcessLaunchFailed(e.to_string()))?;
        Ok(status.code())
    }
}

#[cfg(windows)]
fn shell_command(command: &ShellCommand) -> Command {
    use std::os::windows::process::CommandExt;
    use windows::Win32::System::Threading::CREATE_NO_WINDOW;

    let shell = std::env::var_os("ComSpec").unwrap_or_else(|| "cmd.exe".into());
    let mut cmd = Command::new(shell);
    // UninstallString は引用符を含むため、再クォートせずそのまま渡す
    cmd.raw_arg(shell_args(command));
    cmd.creation_flags(CREATE_NO_WINDOW.0);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &ShellCommand) -> Command {
    // 非Windows環境では sh で直接実行（テスト用）
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command.command_line());
    cmd
}

/// `cmd.exe` に渡す引数文字列
pub fn shell_args(command: &ShellCommand) -> String {
    format!("/c {}", command.command_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_args_prefix_c_switch() {
        let command = ShellCommand::new(
            r#""C:\Program Files\Common Files\Microsoft Shared\ClickToRun\OfficeClickToRun.exe" scenario=install DisplayLevel=False"#,
        )
        .unwrap();
        assert_eq!(
            shell_args(&command),
            r#"/c "C:\Program Files\Common Files\Microsoft Shared\ClickToRun\OfficeClickToRun.exe" scenario=install DisplayLevel=False"#
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn runs_synchronously_and_reports_exit_code() {
        let launcher = ShellLauncher::new();
        let command = ShellCommand::new("exit 3").unwrap();
        assert_eq!(launcher.run_hidden(&command).unwrap(), Some(3));
    }
}
