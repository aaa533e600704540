//! 時刻・待機ポート

use std::time::Duration;

/// 時刻ポート
pub trait Clock {
    /// エポック秒
    fn now_unix_secs(&self) -> i64;

    /// サマリ行用のタイムスタンプ
    fn now_timestamp(&self) -> String;
}

/// 待機ポート（アンインストール間の固定待ち）
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}
