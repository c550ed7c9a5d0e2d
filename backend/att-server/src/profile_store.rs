use att_auth::{AuthError, ProfileStore, Result as AuthErrorResult};
use att_core::{StudentProfile, TenantId};
use att_db::StudentRepository;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Resolves student profiles from the local database for the pipeline.
pub struct DbProfileStore {
    students: StudentRepository,
}

impl DbProfileStore {
    pub fn new(students: StudentRepository) -> Self {
        Self { students }
    }
}

#[async_trait]
impl ProfileStore for DbProfileStore {
    async fn find_by_principal(
        &self,
        tenant_id: TenantId,
        principal_id: &str,
    ) -> AuthErrorResult<Option<StudentProfile>> {
        self.students
            .find_by_principal(tenant_id, principal_id)
            .await
            .map_err(|e| AuthError::ProfileLookup {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
