//! 検出ユースケース（修復は行わない）
//!
//! OS経過時間判定 → 検出 → 三値の結果。

use orr_domain::DomainError;
use orr_domain::model::{HoursThreshold, RunOutcome, exit_codes, join_locales};
use orr_domain::port::driven::{Clock, RegistryReader};
use orr_engine::{check_os_install_age, detect_retail_installations};

use crate::NOT_DETECTED_MESSAGE;

pub struct DetectionDeps<'a> {
    pub registry: &'a dyn RegistryReader,
    pub clock: &'a dyn Clock,
}

pub struct DetectionService<'a> {
    deps: DetectionDeps<'a>,
}

impl<'a> DetectionService<'a> {
    pub fn new(deps: DetectionDeps<'a>) -> Self {
        Self { deps }
    }

    /// 未検出 → 0、検出かつOSが新しい → 1、検出かつ古い → -2、エラー → -3
    pub fn run(&self, threshold: HoursThreshold) -> RunOutcome {
        match self.evaluate(threshold) {
            Ok(outcome) => outcome,
            Err(err) => RunOutcome::new(
                exit_codes::DETECTION_ERROR,
                format!("Detection failed: {}", err),
            ),
        }
    }

    fn evaluate(&self, threshold: HoursThreshold) -> Result<RunOutcome, DomainError> {
        let record = check_os_install_age(self.deps.registry, self.deps.clock, threshold)?;
        let locales = detect_retail_installations(self.deps.registry)?;
        if locales.is_empty() {
            return Ok(RunOutcome::success(NOT_DETECTED_MESSAGE));
        }

        let detected = join_locales(&locales);
        if record.is_within_threshold() {
            Ok(RunOutcome::new(
                exit_codes::FAILURE,
                format!(
                    "Office 365 retail detected ({}); OS installed {} is within threshold of {} hours",
                    detected,
                    record.installed_at_display(),
                    threshold.hours()
                ),
            ))
        } else {
            Ok(RunOutcome::new(
                exit_codes::NOT_WITHIN_THRESHOLD,
                format!(
                    "Office 365 retail detected ({}); OS installed {} is NOT within threshold of {} hours",
                    detected,
                    record.installed_at_display(),
                    threshold.hours()
                ),
            ))
        }
    }
}
