//! Axum extractor that runs the route-level authorization stages

use crate::api::extractors::session_token::{requested_tenant, session_token};
use crate::api::route_policies::RouteRequirements;
use crate::{ApiError, AppState};

use att_auth::RequestContext;

use std::future::Future;
use std::marker::PhantomData;
use std::ops::Deref;

use axum::{extract::FromRequestParts, http::request::Parts};

/// A request that passed authentication, tenant scoping, the role gate and,
/// where the route asks for it, profile loading.
pub struct Authorized<R> {
    pub context: RequestContext,
    route: PhantomData<R>,
}

impl<R> Deref for Authorized<R> {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl<R: RouteRequirements> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let requested = requested_tenant(&parts.headers)?;
            let context = state
                .pipeline
                .authorize(session_token(&parts.headers), requested, &R::POLICY)
                .await?;

            let span = tracing::Span::current();
            span.record("tenant", context.tenant_id);
            span.record("principal", context.principal_id());
            span.record("route", R::POLICY.name);

            Ok(Authorized {
                context,
                route: PhantomData,
            })
        }
    }
}
