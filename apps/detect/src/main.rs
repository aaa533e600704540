//! orr-detect: リテール版 Office 365 を検出し、OSが新しくプロビジョニングされた端末かを
//! 併せて判定する検出スクリプト。修復は行わず三値の結果のみ返す。

use clap::Parser;
use orr_composition::domain::model::{ExitCodePolicy, HoursThreshold};
use orr_composition::error::Result;
use orr_composition::log_utils::LifecycleLog;
use orr_composition::{RemediationRuntime, SummaryOptions, finish, parse_exit_code_policy};

const COMPONENT: &str = "orr-detect";

#[derive(Parser, Debug)]
#[command(
    name = "orr-detect",
    about = "Detect retail Office 365 builds on recently provisioned devices"
)]
struct Cli {
    /// OSインストールからの経過時間のしきい値（時間、境界を含む）
    #[arg(long, default_value_t = HoursThreshold::DEFAULT_HOURS)]
    hours_threshold: u32,
    /// JSON形式で出力
    #[arg(long, default_value_t = false)]
    json: bool,
    /// 負の終了コードの扱い（normalize|preserve）
    #[arg(long, default_value = "normalize", value_parser = parse_exit_code_policy)]
    exit_code_policy: ExitCodePolicy,
}

fn main() {
    let log = LifecycleLog::new(COMPONENT);
    let code = match run(&log) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} failed: {}", COMPONENT, e);
            log.failure(&e);
            1
        }
    };
    std::process::exit(code);
}

fn run(log: &LifecycleLog) -> Result<i32> {
    let cli = Cli::parse();
    let threshold = HoursThreshold::new(cli.hours_threshold);
    log.start(&[
        ("hours_threshold", threshold.hours().to_string()),
        ("exit_code_policy", cli.exit_code_policy.as_str().to_string()),
    ]);

    let runtime = RemediationRuntime::new();
    let outcome = runtime.detection().run(threshold);

    finish(
        log,
        outcome,
        runtime.clock(),
        &SummaryOptions {
            json: cli.json,
            policy: cli.exit_code_policy,
        },
    )
}
