//! 実行ごとのライフサイクルログ
//!
//! 1回の実行は `start` 行で始まり `summary` 行（または `failed` 行）で終わる。
//! 書き込みに失敗しても実行結果には影響させない。

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use orr_domain::service::time_format::format_unix_rfc3339_millis;

const LOG_DIR_NAME: &str = "OfficeRetailRemediation";
const LOG_FILE_NAME: &str = "orr-lifecycle.log";

/// コンポーネント名付きのライフサイクルログ
#[derive(Debug, Clone)]
pub struct LifecycleLog {
    component: &'static str,
    paths: Vec<PathBuf>,
}

impl LifecycleLog {
    /// ProgramData → TEMP の順に書き込み先を試す
    pub fn new(component: &'static str) -> Self {
        Self::with_paths(component, default_log_paths())
    }

    pub fn with_paths(component: &'static str, paths: Vec<PathBuf>) -> Self {
        Self { component, paths }
    }

    pub fn write(&self, message: &str) {
        let line = format_line(&utc_now_millis(), self.component, message);
        append_first_writable(&line, &self.paths);
    }

    /// `start key=value ...`
    pub fn start(&self, settings: &[(&str, String)]) {
        self.write(&start_message(settings));
    }

    /// 標準出力へ出したサマリと、実際にOSへ返す終了コード
    pub fn summary(&self, rendered: &str, exit_code: i32) {
        self.write(&summary_message(rendered, exit_code));
    }

    /// サマリを出せずに終わった場合
    pub fn failure(&self, error: &dyn Display) {
        self.write(&format!("failed: {}", error));
    }
}

/// 既定の出力先
pub fn default_log_paths() -> Vec<PathBuf> {
    let base = std::env::var("ProgramData").unwrap_or_else(|_| "C:\\ProgramData".to_string());
    vec![
        PathBuf::from(base)
            .join(LOG_DIR_NAME)
            .join("logs")
            .join(LOG_FILE_NAME),
        std::env::temp_dir().join(LOG_FILE_NAME),
    ]
}

fn format_line(timestamp: &str, component: &str, message: &str) -> String {
    format!("[{}] [{}] {}\n", timestamp, component, message)
}

fn start_message(settings: &[(&str, String)]) -> String {
    let mut message = String::from("start");
    for (key, value) in settings {
        message.push_str(&format!(" {}={}", key, value));
    }
    message
}

fn summary_message(rendered: &str, exit_code: i32) -> String {
    format!("summary exit={}: {}", exit_code, rendered)
}

fn utc_now_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format_unix_rfc3339_millis(now.as_secs() as i64, now.subsec_millis())
}

fn append_first_writable(line: &str, paths: &[PathBuf]) {
    for path in paths {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
            return;
        }
    }
}
