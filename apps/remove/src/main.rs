//! orr-remove: リテール版 Office 365 を検出し、サイレントアンインストールする修復スクリプト。
//! Intune のリメディエーションから SYSTEM 権限で起動される想定。

use clap::Parser;
use orr_composition::app::RemovalOptions;
use orr_composition::domain::model::ExitCodePolicy;
use orr_composition::error::Result;
use orr_composition::log_utils::LifecycleLog;
use orr_composition::{RemediationRuntime, SummaryOptions, finish, parse_exit_code_policy};

const COMPONENT: &str = "orr-remove";

#[derive(Parser, Debug)]
#[command(
    name = "orr-remove",
    about = "Detect and silently uninstall retail Office 365 builds"
)]
struct Cli {
    /// 検出までを行い、アンインストーラーは起動しない
    #[arg(long, default_value_t = false)]
    dry_run: bool,
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
    log.start(&[
        ("dry_run", cli.dry_run.to_string()),
        ("exit_code_policy", cli.exit_code_policy.as_str().to_string()),
    ]);

    // 全依存関係はComposition Rootで組み立て
    let runtime = RemediationRuntime::new();
    let options = RemovalOptions {
        dry_run: cli.dry_run,
        logger: Some(log_line),
    };
    // 権限不足はサマリを出さず起動エラーとして扱う
    let outcome = runtime.removal().run(&options)?;

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

fn log_line(message: &str) {
    LifecycleLog::new(COMPONENT).write(message);
}
