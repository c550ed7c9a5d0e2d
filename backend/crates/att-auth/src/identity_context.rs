use crate::{Claims, Result as AuthErrorResult};

use att_core::{Role, TenantId};

use serde_json::Value;

/// Verified caller identity, produced once per request by a session validator
#[derive(Debug, Clone)]
pub struct IdentityContext {
    pub principal_id: String,
    pub role: Role,
    pub tenant_id: TenantId,
    /// Provider payload as received, kept for handlers that need extra fields
    pub raw_claims: Value,
}

impl IdentityContext {
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let role = claims.parsed_role()?;
        let raw_claims = serde_json::to_value(&claims).unwrap_or(Value::Null);

        Ok(Self {
            principal_id: claims.sub,
            role,
            tenant_id: claims.tenant_id,
            raw_claims,
        })
    }

    pub fn has_role(&self, allowed: &[Role]) -> bool {
        self.role.is_any_of(allowed)
    }
}
