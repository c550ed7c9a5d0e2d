use crate::{AuthError, Result as AuthErrorResult};

use att_core::{Role, TenantId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session JWT claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id
    pub sub: String,
    /// College the principal belongs to
    pub tenant_id: TenantId,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Anything else the provider put in the token
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.tenant_id <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "tenant_id".to_string(),
                message: format!("tenant_id must be positive, got {}", self.tenant_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.parsed_role()?;

        Ok(())
    }

    #[track_caller]
    pub fn parsed_role(&self) -> AuthErrorResult<Role> {
        self.role.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "role".to_string(),
            message: format!("unknown role '{}'", self.role),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
