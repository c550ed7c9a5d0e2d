use crate::{AuthError, IdentityContext, Result as AuthErrorResult, SESSION_HEADER, SessionValidator};

use att_core::{Role, TenantId};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

const SERVICE: &str = "identity provider";
const WHOAMI_PATH: &str = "/sessions/whoami";

/// Validates sessions against a remote identity provider's whoami endpoint.
pub struct RemoteSessionValidator {
    client: Client,
    identity_url: String,
}

#[derive(Debug, Deserialize)]
struct WhoAmI {
    #[serde(default)]
    active: bool,
    identity: Option<Identity>,
}

#[derive(Debug, Deserialize)]
struct Identity {
    id: String,
    #[serde(default)]
    metadata_public: Option<PublicMetadata>,
}

#[derive(Debug, Deserialize)]
struct PublicMetadata {
    role: Option<String>,
    college_id: Option<TenantId>,
}

impl RemoteSessionValidator {
    #[track_caller]
    pub fn new(identity_url: impl Into<String>, timeout: Duration) -> AuthErrorResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| upstream(e.to_string()))?;

        Ok(Self {
            client,
            identity_url: identity_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn whoami_url(&self) -> String {
        format!("{}{}", self.identity_url, WHOAMI_PATH)
    }
}

#[async_trait]
impl SessionValidator for RemoteSessionValidator {
    async fn validate_session(&self, session_token: &str) -> AuthErrorResult<IdentityContext> {
        let response = self
            .client
            .get(self.whoami_url())
            .header(SESSION_HEADER, session_token)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("Identity provider rejected session ({})", status);
            return Err(AuthError::Unauthenticated {
                message: "session is not valid".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !status.is_success() {
            warn!("Identity provider returned {}", status);
            return Err(upstream(format!("unexpected status {status}")));
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| upstream(format!("unreadable whoami body: {e}")))?;
        identity_from_whoami(raw)
    }
}

#[track_caller]
fn identity_from_whoami(raw: Value) -> AuthErrorResult<IdentityContext> {
    let whoami: WhoAmI = serde_json::from_value(raw.clone())
        .map_err(|e| upstream(format!("malformed whoami body: {e}")))?;

    let identity = match whoami.identity {
        Some(identity) if whoami.active => identity,
        _ => {
            return Err(AuthError::Unauthenticated {
                message: "session is not active".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let metadata = identity.metadata_public.ok_or_else(|| missing_claim("metadata_public"))?;
    let role: Role = metadata
        .role
        .ok_or_else(|| missing_claim("role"))?
        .parse()
        .map_err(|_| AuthError::InvalidClaim {
            claim: "role".to_string(),
            message: "unknown role".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let tenant_id = metadata.college_id.ok_or_else(|| missing_claim("college_id"))?;

    Ok(IdentityContext {
        principal_id: identity.id,
        role,
        tenant_id,
        raw_claims: raw,
    })
}

#[track_caller]
fn missing_claim(claim: &str) -> AuthError {
    AuthError::InvalidClaim {
        claim: claim.to_string(),
        message: "missing from identity metadata".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn upstream(message: String) -> AuthError {
    AuthError::Upstream {
        service: SERVICE,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
