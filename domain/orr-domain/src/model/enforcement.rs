//! IME（Intune Management Extension）の実行状態

/// Win32Apps\<SID>\<GUID>\EnforcementState の値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnforcementState(u32);

impl EnforcementState {
    /// インストールコマンド受信済み
    pub const INSTALL_COMMAND_RECEIVED: u32 = 1003;
    /// 実行中
    pub const IN_PROGRESS: u32 = 2000;

    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    /// IMEがインストール処理中か（1003 / 2000 のみ）
    pub fn is_busy(&self) -> bool {
        matches!(self.0, Self::INSTALL_COMMAND_RECEIVED | Self::IN_PROGRESS)
    }
}
