//! 実行権限ポート

/// 現在のプロセストークンが管理者として昇格済みか
pub trait PrivilegeCheck {
    fn is_elevated(&self) -> bool;
}
