use crate::{AuthError, PolicyClient, Resource, Result as AuthErrorResult};

use att_core::RelationTuple;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

const SERVICE: &str = "policy engine";
const CHECK_PATH: &str = "/relation-tuples/check";
const ADMIN_TUPLES_PATH: &str = "/admin/relation-tuples";

/// Policy engine reached over its REST read/write APIs.
pub struct RemotePolicyClient {
    client: Client,
    read_url: String,
    write_url: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    allowed: bool,
}

#[derive(Debug, Serialize)]
struct TupleBody<'a> {
    namespace: &'a str,
    object: &'a str,
    relation: &'a str,
    subject_id: &'a str,
}

impl<'a> From<&'a RelationTuple> for TupleBody<'a> {
    fn from(tuple: &'a RelationTuple) -> Self {
        Self {
            namespace: &tuple.namespace,
            object: &tuple.object,
            relation: &tuple.relation,
            subject_id: &tuple.subject,
        }
    }
}

impl RemotePolicyClient {
    #[track_caller]
    pub fn new(
        read_url: impl Into<String>,
        write_url: impl Into<String>,
        timeout: Duration,
    ) -> AuthErrorResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| upstream(e.to_string()))?;

        Ok(Self {
            client,
            read_url: read_url.into().trim_end_matches('/').to_string(),
            write_url: write_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[track_caller]
    fn url(base: &str, path: &str, body: &TupleBody<'_>) -> AuthErrorResult<Url> {
        Url::parse_with_params(
            &format!("{base}{path}"),
            [
                ("namespace", body.namespace),
                ("object", body.object),
                ("relation", body.relation),
                ("subject_id", body.subject_id),
            ],
        )
        .map_err(|e| upstream(format!("invalid policy url: {e}")))
    }
}

#[async_trait]
impl PolicyClient for RemotePolicyClient {
    async fn check(
        &self,
        subject: &str,
        action: &str,
        resource: &Resource,
    ) -> AuthErrorResult<bool> {
        let query = TupleBody {
            namespace: &resource.namespace,
            object: &resource.object,
            relation: action,
            subject_id: subject,
        };
        let url = Self::url(&self.read_url, CHECK_PATH, &query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        match response.status() {
            // The engine answers a denied check with 403 and allowed=false
            StatusCode::FORBIDDEN => Ok(false),
            status if status.is_success() => {
                let body: CheckResponse = response
                    .json()
                    .await
                    .map_err(|e| upstream(format!("unreadable check body: {e}")))?;
                debug!(
                    "Policy check {}#{}@{} -> {}",
                    resource, action, subject, body.allowed
                );
                Ok(body.allowed)
            }
            status => {
                warn!("Policy check returned {}", status);
                Err(upstream(format!("unexpected status {status}")))
            }
        }
    }

    async fn create_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()> {
        let response = self
            .client
            .put(format!("{}{}", self.write_url, ADMIN_TUPLES_PATH))
            .json(&TupleBody::from(tuple))
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Creating relation {} returned {}", tuple, status);
            return Err(upstream(format!("unexpected status {status}")));
        }
        Ok(())
    }

    async fn delete_relation(&self, tuple: &RelationTuple) -> AuthErrorResult<()> {
        let url = Self::url(&self.write_url, ADMIN_TUPLES_PATH, &TupleBody::from(tuple))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| upstream(e.to_string()))?;

        let status = response.status();
        // Deleting an absent tuple is not an error
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            warn!("Deleting relation {} returned {}", tuple, status);
            return Err(upstream(format!("unexpected status {status}")));
        }
        Ok(())
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
