//! OfficeRetailRemediation ドメイン層
//!
//! 判定ロジックの中核。外部依存ゼロでRust標準ライブラリのみ使用。
//! ヘキサゴナルアーキテクチャの最内層。

pub mod error;   // ドメインエラー定義
pub mod model;   // ドメインモデル（ロケール、判定結果、サマリ）
pub mod port;    // ポート（driven）
pub mod service; // ドメインサービス（純粋関数）

pub use error::DomainError; // エラー型を再エクスポート

#[cfg(any(test, feature = "testing"))]
pub mod testing; // テスト用インメモリポート
