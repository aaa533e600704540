//! ドメインサービス
//!
//! ポートに依存しない純粋な判定ロジック。

pub mod age_service;
pub mod command_service;
pub mod privilege_service;
pub mod time_format;

pub use age_service::evaluate_install_age;
pub use command_service::{SILENT_FLAG, silent_uninstall_command};
pub use privilege_service::ensure_admin;
