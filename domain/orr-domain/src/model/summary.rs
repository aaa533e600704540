//! 実行サマリと終了コードポリシー

use std::fmt;

use super::RunOutcome;

/// サマリ行の重大度（終了コードから導出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Fail,
    Warning,
}

impl Severity {
    /// 0 → OK、1 → FAIL、それ以外（負数を含む）→ WARNING
    pub fn from_status(status_code: i32) -> Self {
        match status_code {
            0 => Severity::Ok,
            1 => Severity::Fail,
            _ => Severity::Warning,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Fail => "FAIL",
            Severity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// 終了直前に1回だけ構築されるサマリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    status_code: i32,
    message: String,
    timestamp: String,
}

impl ExecutionSummary {
    pub fn new(outcome: RunOutcome, timestamp: impl Into<String>) -> Self {
        Self {
            status_code: outcome.status_code,
            message: outcome.message,
            timestamp: timestamp.into(),
        }
    }

    /// 正規化前の内部コード
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// 接頭辞は常に正規化前のコードから決まる
    pub fn severity(&self) -> Severity {
        Severity::from_status(self.status_code)
    }

    /// `<PREFIX> <timestamp> = <message>`
    pub fn render(&self) -> String {
        format!("{} {} = {}", self.severity(), self.timestamp, self.message)
    }
}

impl fmt::Display for ExecutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// 内部コードからOS終了コードへの変換方針
///
/// `Normalize` では負のコードが 0 になる。接頭辞は WARNING のまま終了コード 0 となるため、
/// 呼び出し側が -2 / -3 を区別するにはサマリ文字列を解析する必要がある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitCodePolicy {
    #[default]
    Normalize,
    Preserve,
}

impl ExitCodePolicy {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "normalize" => Some(Self::Normalize),
            "preserve" => Some(Self::Preserve),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::Preserve => "preserve",
        }
    }

    pub fn process_exit_code(&self, status_code: i32) -> i32 {
        match self {
            Self::Normalize if status_code < 0 => 0,
            _ => status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::exit_codes;

    #[test]
    fn severity_prefixes() {
        assert_eq!(Severity::from_status(0).prefix(), "OK");
        assert_eq!(Severity::from_status(1).prefix(), "FAIL");
        assert_eq!(Severity::from_status(-2).prefix(), "WARNING");
        assert_eq!(Severity::from_status(-3).prefix(), "WARNING");
        assert_eq!(Severity::from_status(7).prefix(), "WARNING");
    }

    #[test]
    fn render_uses_single_line_format() {
        let summary = ExecutionSummary::new(
            RunOutcome::success("Office 365 retail NOT detected"),
            "2026-10-19 08:15:00",
        );
        assert_eq!(
            summary.render(),
            "OK 2026-10-19 08:15:00 = Office 365 retail NOT detected"
        );
    }

    #[test]
    fn normalize_policy_hides_negative_codes_but_keeps_warning_prefix() {
        let summary = ExecutionSummary::new(
            RunOutcome::new(exit_codes::NOT_WITHIN_THRESHOLD, "x"),
            "t",
        );
        let policy = ExitCodePolicy::default();
        assert_eq!(summary.severity(), Severity::Warning);
        assert_eq!(policy.process_exit_code(summary.status_code()), 0);
        assert_eq!(policy.process_exit_code(exit_codes::DETECTION_ERROR), 0);
        assert_eq!(policy.process_exit_code(exit_codes::FAILURE), 1);
    }

    #[test]
    fn preserve_policy_passes_codes_through() {
        let policy = ExitCodePolicy::Preserve;
        assert_eq!(policy.process_exit_code(-2), -2);
        assert_eq!(policy.process_exit_code(-3), -3);
        assert_eq!(policy.process_exit_code(0), 0);
    }

    #[test]
    fn policy_flag_parsing() {
        assert_eq!(ExitCodePolicy::from_flag("Normalize"), Some(ExitCodePolicy::Normalize));
        assert_eq!(ExitCodePolicy::from_flag("preserve"), Some(ExitCodePolicy::Preserve));
        assert_eq!(ExitCodePolicy::from_flag("drop"), None);
    }
}
