//! orr-composition: 各実行ファイル向けのランタイムを組み立てるコンポジションルート。
//! ドメイン／アプリケーション／各種アダプタをここで配線し、apps/* はこのクレートだけに依存する。

pub mod error;
pub mod report;
pub mod runtime;

// apps/* が内側レイヤーの型に触れる必要がある場合は、ここから辿れるようにする。
pub use orr_app as app;
pub use orr_domain as domain;
pub use orr_log_utils as log_utils;

pub use error::RunError;
pub use report::{SummaryOptions, finish, parse_exit_code_policy};
pub use runtime::RemediationRuntime;
