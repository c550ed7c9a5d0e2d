use crate::{StudentId, StudentStatus, TenantId};

use serde::{Deserialize, Serialize};

/// Internal student record resolved from an identity's principal id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub id: StudentId,
    pub tenant_id: TenantId,
    /// Identity provider subject this record belongs to
    pub principal_id: String,
    pub name: String,
    pub status: StudentStatus,
}

impl StudentProfile {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
