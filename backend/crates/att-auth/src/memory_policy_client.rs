use crate::{PolicyClient, Resource, Result as AuthErrorResult};

use att_core::RelationTuple;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Policy engine held in process memory.
///
/// Used for local development and tests; `check_count` lets callers
/// assert whether a request reached the engine at all.
#[derive(Default)]
pub struct InMemoryPolicyClient {
    tuples: RwLock<HashSet<RelationTuple>>,
    checks: AtomicUsize,
}

impl InMemoryPolicyClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuples(tuples: impl IntoIterator<Item = RelationTuple>) -> Self {
        Self {
            tuples: RwLock::new(tuples.into_iter().collect()),
            checks: AtomicUsize::new(0),
        }
    }

    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.tuples.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tuples.read().await.is_empty()
    }
}

#[async_trait]
impl PolicyClient for InMemoryPolicyClient {
    async fn check(
        &self,
        subject: &str,
        action: &str,
        resource: &Resource,
    ) -> AuthErrorResult<bool> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        let probe = RelationTuple::new(
            resource.namespace.as_str(),
            resource.object.as_str(),
            action,
            subject,
        );
        Ok(self.tuples.read().await.contains(&probe))
    }

    async fn create_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()> {
        self.tuples.write().await.insert(tuple.clone());
        Ok(())
    }

    async fn delete_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()> {
        self.tuples.write().await.remove(tuple);
        Ok(())
    }
}
