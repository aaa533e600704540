//! OSインストール日時の判定結果

use crate::service::time_format::format_unix_utc;

/// OS経過時間のしきい値（時間）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursThreshold(u32);

impl HoursThreshold {
    pub const DEFAULT_HOURS: u32 = 24;

    pub fn new(hours: u32) -> Self {
        Self(hours)
    }

    pub fn hours(&self) -> u32 {
        self.0
    }

    pub fn as_secs(&self) -> i64 {
        i64::from(self.0) * 3_600
    }
}

impl Default for HoursThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_HOURS)
    }
}

/// 1回の実行で一度だけ導出される判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallDateRecord {
    within_threshold: bool,
    installed_at: i64,
}

impl InstallDateRecord {
    pub fn new(within_threshold: bool, installed_at: i64) -> Self {
        Self {
            within_threshold,
            installed_at,
        }
    }

    pub fn is_within_threshold(&self) -> bool {
        self.within_threshold
    }

    /// インストール日時（エポック秒）
    pub fn installed_at(&self) -> i64 {
        self.installed_at
    }

    /// 表示用（UTC）
    pub fn installed_at_display(&self) -> String {
        format_unix_utc(self.installed_at)
    }
}
