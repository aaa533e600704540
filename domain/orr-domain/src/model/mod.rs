//! ドメインモデル
//!
//! 標準ライブラリのみ使用（外部依存なし）
//! 値オブジェクトと判定結果の型を定義

pub mod exit_codes;     // 終了コード定義
pub mod registry_paths; // 参照するレジストリパス
mod enforcement;        // IMEの実行状態（EnforcementState）
mod install_date;       // OSインストール日時の判定結果
mod locale;             // リテール版の検出対象ロケール
mod outcome;            // 判定フローの結果
mod summary;            // 実行サマリと終了コードポリシー

pub use enforcement::*;
pub use install_date::*;
pub use locale::*;
pub use outcome::*;
pub use summary::*;
