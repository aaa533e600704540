//! 管理者権限チェック

use crate::DomainError;
use crate::port::driven::PrivilegeCheck;

/// 昇格していなければ `InsufficientPrivileges`
pub fn ensure_admin(privilege: &dyn PrivilegeCheck) -> Result<(), DomainError> {
    if privilege.is_elevated() {
        Ok(())
    } else {
        Err(DomainError::InsufficientPrivileges(
            "administrator rights are required".into(),
        ))
    }
}
