//! Relation tuple administration against the policy engine

use crate::api::bounded::bounded;
use crate::api::route_policies::ManageRelations;
use crate::{ApiError, ApiResult, AppState, Authorized, RelationRequest, RelationResponse};

use att_auth::scoped_object;
use att_core::{RelationTuple, TenantId};

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// PUT /api/admin/relations
pub async fn create_relation(
    State(state): State<AppState>,
    auth: Authorized<ManageRelations>,
    Json(req): Json<RelationRequest>,
) -> ApiResult<(StatusCode, Json<RelationResponse>)> {
    let tuple = scoped_tuple(auth.tenant_id, req)?;

    bounded(
        state.call_timeout,
        "relation create",
        state.pipeline.policy().create_relation(&tuple),
    )
    .await?;

    info!("{} created relation {}", auth.principal_id(), tuple);

    Ok((StatusCode::CREATED, Json(tuple.into())))
}

/// DELETE /api/admin/relations
pub async fn delete_relation(
    State(state): State<AppState>,
    auth: Authorized<ManageRelations>,
    Json(req): Json<RelationRequest>,
) -> ApiResult<StatusCode> {
    let tuple = scoped_tuple(auth.tenant_id, req)?;

    bounded(
        state.call_timeout,
        "relation delete",
        state.pipeline.policy().delete_relation(&tuple),
    )
    .await?;

    info!("{} deleted relation {}", auth.principal_id(), tuple);

    Ok(StatusCode::NO_CONTENT)
}

/// Validate the request and pin its object to the caller's college.
#[track_caller]
fn scoped_tuple(tenant_id: TenantId, req: RelationRequest) -> Result<RelationTuple, ApiError> {
    for (field, value) in [
        ("namespace", &req.namespace),
        ("object", &req.object),
        ("relation", &req.relation),
        ("subject", &req.subject),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::validation(field, format!("{field} cannot be empty")));
        }
    }
    if req.object.contains(':') {
        return Err(ApiError::validation(
            "object",
            "object must not carry a college prefix",
        ));
    }

    Ok(RelationTuple::new(
        req.namespace.trim(),
        scoped_object(tenant_id, req.object.trim()),
        req.relation.trim(),
        req.subject.trim(),
    ))
}
