//! orr-app: アプリケーション層のファサード。
//! Engine 層とドメインポートを組み合わせて、リテール版の除去／検出の
//! ユースケースを実装する。プロセス終了は行わず `RunOutcome` を返す。

pub mod detection;
pub mod removal;

pub use detection::{DetectionDeps, DetectionService};
pub use removal::{RemovalDeps, RemovalOptions, RemovalService};

/// 未検出時のメッセージ（両フロー共通）
pub const NOT_DETECTED_MESSAGE: &str = "Office 365 retail NOT detected";
