//! 判定フローの終了コード定義
//!
//! 負の値は内部用。既定ポリシーではプロセス終了時に 0 へ正規化される。

/// 正常終了（未検出、またはアンインストール完了）
pub const SUCCESS: i32 = 0;
/// 失敗（権限不足、IMEビジー、アンインストール失敗）／検出かつOSが新しい
pub const FAILURE: i32 = 1;
/// 検出されたがOSインストールがしきい値より古い
pub const NOT_WITHIN_THRESHOLD: i32 = -2;
/// 検出フロー内部エラー
pub const DETECTION_ERROR: i32 = -3;
