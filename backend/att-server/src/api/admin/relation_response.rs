use att_core::RelationTuple;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationResponse {
    pub namespace: String,
    /// Tenant-scoped: `<college>:<object>`
    pub object: String,
    pub relation: String,
    pub subject: String,
}

impl From<RelationTuple> for RelationResponse {
    fn from(tuple: RelationTuple) -> Self {
        Self {
            namespace: tuple.namespace,
            object: tuple.object,
            relation: tuple.relation,
            subject: tuple.subject,
        }
    }
}
