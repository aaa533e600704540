//! 時刻・待機アダプター
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use orr_domain::port::driven::{Clock, Sleeper};

#[derive(Debug, Default)]
pub struct ClockAdapter;

impl ClockAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for ClockAdapter {
    fn now_unix_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn now_timestamp(&self) -> String {
        utc_timestamp_now()
    }
}

impl Sleeper for ClockAdapter {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// `YYYY-MM-DD HH:MM:SS UTC`（OSインストール日時の表示と同じ形式）
fn utc_timestamp_now() -> String {
    #[cfg(windows)]
    {
        use windows::Win32::System::SystemInformation::GetSystemTime;
        let st = unsafe { GetSystemTime() };
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            st.wYear, st.wMonth, st.wDay, st.wHour, st.wMinute, st.wSecond
        )
    }
    #[cfg(not(windows))]
    {
        orr_domain::service::time_format::format_unix_utc(ClockAdapter.now_unix_secs())
    }
}
