//! サマリ出力と終了コード決定。
//!
//! 実行ごとに1回だけ呼ばれる。コンソールへ1行（または JSON）を出し、
//! ライフサイクルログへ同じ行を残して、OSへ渡す終了コードを返す。

use orr_domain::model::{ExecutionSummary, ExitCodePolicy, RunOutcome};
use orr_domain::port::driven::Clock;
use orr_log_utils::LifecycleLog;
use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryOptions {
    /// JSON形式で出力
    pub json: bool,
    pub policy: ExitCodePolicy,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    level: &'a str,
    timestamp: &'a str,
    message: &'a str,
    status_code: i32,
    exit_code: i32,
    exit_code_policy: &'a str,
}

/// `--exit-code-policy` の値パーサ（clap の `value_parser` 用）
pub fn parse_exit_code_policy(flag: &str) -> std::result::Result<ExitCodePolicy, String> {
    ExitCodePolicy::from_flag(flag)
        .ok_or_else(|| format!("expected `normalize` or `preserve`, got `{}`", flag))
}

/// サマリを出力して終了コードを返す
pub fn finish(
    log: &LifecycleLog,
    outcome: RunOutcome,
    clock: &dyn Clock,
    options: &SummaryOptions,
) -> Result<i32> {
    let summary = ExecutionSummary::new(outcome, clock.now_timestamp());
    let exit_code = options.policy.process_exit_code(summary.status_code());
    let line = render(&summary, options)?;

    log.summary(&summary.render(), exit_code);
    println!("{}", line);
    Ok(exit_code)
}

/// テキスト行または JSON 文字列
pub fn render(summary: &ExecutionSummary, options: &SummaryOptions) -> Result<String> {
    if !options.json {
        return Ok(summary.render());
    }
    let json = JsonSummary {
        level: summary.severity().prefix(),
        timestamp: summary.timestamp(),
        message: summary.message(),
        status_code: summary.status_code(),
        exit_code: options.policy.process_exit_code(summary.status_code()),
        exit_code_policy: options.policy.as_str(),
    };
    Ok(serde_json::to_string(&json)?)
}
