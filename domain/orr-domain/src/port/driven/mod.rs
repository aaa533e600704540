//! 駆動ポート（出力インターフェース）。
//!
//! ドメインが外部に求める機能を定義する。
//! インフラ層のアダプタが実装する。

mod clock;
mod privilege_check;
mod process_launcher;
mod registry_reader;

pub use clock::*;
pub use privilege_check::*;
pub use process_launcher::*;
pub use registry_reader::*;
