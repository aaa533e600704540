//! 実行ファイル用ランタイム配線。

use orr_adapter_clock::ClockAdapter;
use orr_adapter_privilege::PrivilegeAdapter;
use orr_adapter_process::ShellLauncher;
use orr_adapter_registry::RegistryAdapter;
use orr_app::{DetectionDeps, DetectionService, RemovalDeps, RemovalService};
use orr_domain::port::driven::Clock;

/// orr-remove / orr-detect 共通の依存関係
pub struct RemediationRuntime {
    registry: RegistryAdapter,
    privilege: PrivilegeAdapter,
    launcher: ShellLauncher,
    clock: ClockAdapter,
}

impl RemediationRuntime {
    pub fn new() -> Self {
        Self {
            registry: RegistryAdapter::new(),
            privilege: PrivilegeAdapter::new(),
            launcher: ShellLauncher::new(),
            clock: ClockAdapter::new(),
        }
    }

    /// 除去ユースケース
    pub fn removal(&self) -> RemovalService<'_> {
        RemovalService::new(RemovalDeps {
            privilege: &self.privilege,
            registry: &self.registry,
            launcher: &self.launcher,
            sleeper: &self.clock,
        })
    }

    /// 検出ユースケース
    pub fn detection(&self) -> DetectionService<'_> {
        DetectionService::new(DetectionDeps {
            registry: &self.registry,
            clock: &self.clock,
        })
    }

    pub fn clock(&self) -> &dyn Clock {
        &self.clock
    }
}

impl Default for RemediationRuntime {
    fn default() -> Self {
        Self::new()
    }
}
