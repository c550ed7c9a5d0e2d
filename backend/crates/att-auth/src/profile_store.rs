use crate::Result as AuthErrorResult;

use att_core::{StudentProfile, TenantId};

use async_trait::async_trait;

/// Lookup of internal student records by identity principal.
///
/// Implementations map storage failures to `AuthError::ProfileLookup`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_principal(
        &self,
        tenant_id: TenantId,
        principal_id: &str,
    ) -> AuthErrorResult<Option<StudentProfile>>;
}
