use att_auth::IdentityContext;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub principal_id: String,
    pub role: String,
    pub college_id: i64,
}

impl From<IdentityContext> for IdentityResponse {
    fn from(identity: IdentityContext) -> Self {
        Self {
            principal_id: identity.principal_id,
            role: identity.role.as_str().to_string(),
            college_id: identity.tenant_id,
        }
    }
}
