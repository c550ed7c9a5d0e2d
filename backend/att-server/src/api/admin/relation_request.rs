use serde::{Deserialize, Serialize};

/// Tuple as the admin sends it. `object` is unscoped; the server prefixes
/// the caller's college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationRequest {
    pub namespace: String,
    pub object: String,
    pub relation: String,
    pub subject: String,
}
