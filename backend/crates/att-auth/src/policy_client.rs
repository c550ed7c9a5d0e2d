use crate::{Resource, Result as AuthErrorResult};

use att_core::RelationTuple;

use async_trait::async_trait;

/// Relationship-based permission engine.
///
/// `check` answers transport failures with `Err`; callers decide how to fail.
#[async_trait]
pub trait PolicyClient: Send + Sync {
    async fn check(&self, subject: &str, action: &str, resource: &Resource)
    -> AuthErrorResult<bool>;

    async fn create_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()>;

    async fn delete_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()>;
}
