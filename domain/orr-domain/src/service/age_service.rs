//! OS経過時間の判定

use crate::model::{HoursThreshold, InstallDateRecord};

/// 経過時間がしきい値以内か（境界を含む）。
/// 時計ずれでインストール日時が未来にある場合も「以内」とみなす。
pub fn evaluate_install_age(
    installed_at: i64,
    now: i64,
    threshold: HoursThreshold,
) -> InstallDateRecord {
    let elapsed = now.saturating_sub(installed_at);
    InstallDateRecord::new(elapsed <= threshold.as_secs(), installed_at)
}
