use crate::{IdentityContext, JwtValidator, Result as AuthErrorResult};

use async_trait::async_trait;

/// Resolves a session token into a verified identity.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate_session(&self, session_token: &str) -> AuthErrorResult<IdentityContext>;
}

/// Validates sessions issued as HS256 JWTs, without a network hop
pub struct JwtSessionValidator {
    validator: JwtValidator,
}

impl JwtSessionValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            validator: JwtValidator::with_hs256(secret),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate_session(&self, session_token: &str) -> AuthErrorResult<IdentityContext> {
        let claims = self.validator.validate(session_token)?;
        IdentityContext::from_claims(claims)
    }
}
