//! Per-request authorization pipeline.
//!
//! Stages run in a fixed order and short-circuit on the first failure:
//! authenticate, scope tenant, require role, load profile, verify
//! ownership, delegated check. Routes declare which stages apply through
//! a [`RoutePolicy`]; ownership runs from the handler once the target
//! student is known.

use crate::{
    AuthError, IdentityContext, PolicyClient, ProfileStore, Resource, Result as AuthErrorResult,
    SessionValidator,
};

use att_core::{Role, StudentId, StudentProfile, TenantId};

use std::future::Future;
use std::panic::Location;
use std::sync::Arc;
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use log::{debug, warn};
use metrics::{counter, histogram};

/// Authorization requirements declared by a route.
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub name: &'static str,
    pub roles: &'static [Role],
    /// Resolve the caller's student record when the caller is a Student
    pub load_profile: bool,
}

/// Everything the pipeline established about the caller.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub identity: IdentityContext,
    pub tenant_id: TenantId,
    pub profile: Option<StudentProfile>,
}

impl RequestContext {
    pub fn role(&self) -> Role {
        self.identity.role
    }

    pub fn principal_id(&self) -> &str {
        &self.identity.principal_id
    }
}

/// How an ownership check was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The caller's own student record
    Owner,
    /// Someone else's record, granted by the policy engine
    Delegated,
}

pub struct AuthorizationPipeline {
    sessions: Arc<dyn SessionValidator>,
    policy: Arc<dyn PolicyClient>,
    profiles: Arc<dyn ProfileStore>,
    call_timeout: Duration,
}

impl AuthorizationPipeline {
    pub fn new(
        sessions: Arc<dyn SessionValidator>,
        policy: Arc<dyn PolicyClient>,
        profiles: Arc<dyn ProfileStore>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            sessions,
            policy,
            profiles,
            call_timeout,
        }
    }

    pub fn policy(&self) -> &Arc<dyn PolicyClient> {
        &self.policy
    }

    /// Runs the route-level stages (authenticate through load profile).
    pub async fn authorize(
        &self,
        session_token: Option<&str>,
        requested_tenant: Option<TenantId>,
        route: &RoutePolicy,
    ) -> AuthErrorResult<RequestContext> {
        let started = Instant::now();
        let result = self.run_route_stages(session_token, requested_tenant, route).await;
        histogram!("att.pipeline.duration_seconds").record(started.elapsed().as_secs_f64());
        match &result {
            Ok(ctx) => debug!(
                "{} authorized {} ({}) in tenant {}",
                route.name,
                ctx.identity.principal_id,
                ctx.identity.role,
                ctx.tenant_id
            ),
            Err(e) => record_denial(route.name, e),
        }
        result
    }

    async fn run_route_stages(
        &self,
        session_token: Option<&str>,
        requested_tenant: Option<TenantId>,
        route: &RoutePolicy,
    ) -> AuthErrorResult<RequestContext> {
        let identity = self.authenticate(session_token).await?;
        let tenant_id = Self::scope_tenant(&identity, requested_tenant)?;
        Self::require_role(&identity, route.roles)?;
        let profile = if route.load_profile {
            self.load_profile(&identity, tenant_id).await?
        } else {
            None
        };

        Ok(RequestContext {
            identity,
            tenant_id,
            profile,
        })
    }

    /// Stage 1: resolve the session token into an identity.
    pub async fn authenticate(&self, session_token: Option<&str>) -> AuthErrorResult<IdentityContext> {
        let token = session_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::Unauthenticated {
                message: "missing session token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.bounded("session validation", self.sessions.validate_session(token))
            .await?
    }

    /// Stage 2: the identity's tenant is authoritative; a requested tenant must match it.
    #[track_caller]
    pub fn scope_tenant(
        identity: &IdentityContext,
        requested_tenant: Option<TenantId>,
    ) -> AuthErrorResult<TenantId> {
        match requested_tenant {
            Some(requested) if requested != identity.tenant_id => Err(AuthError::TenantMismatch {
                identity_tenant: identity.tenant_id,
                requested_tenant: requested,
                location: ErrorLocation::from(Location::caller()),
            }),
            _ => Ok(identity.tenant_id),
        }
    }

    /// Stage 3: "any-of" role gate.
    #[track_caller]
    pub fn require_role(identity: &IdentityContext, allowed: &[Role]) -> AuthErrorResult<()> {
        if identity.has_role(allowed) {
            return Ok(());
        }
        Err(AuthError::InsufficientRole {
            role: identity.role,
            allowed: allowed.to_vec(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Stage 4: Students must map to an active student record; other roles skip this.
    pub async fn load_profile(
        &self,
        identity: &IdentityContext,
        tenant_id: TenantId,
    ) -> AuthErrorResult<Option<StudentProfile>> {
        if identity.role != Role::Student {
            return Ok(None);
        }

        let profile = self
            .bounded(
                "profile lookup",
                self.profiles.find_by_principal(tenant_id, &identity.principal_id),
            )
            .await??
            .ok_or_else(|| AuthError::ProfileNotFound {
                tenant_id,
                principal_id: identity.principal_id.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !profile.is_active() {
            return Err(AuthError::ProfileInactive {
                student_id: profile.id,
                status: profile.status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Some(profile))
    }

    /// Stages 5 and 6: a caller acting on their own record passes without a
    /// policy call; anyone else needs `action` on the target student.
    pub async fn verify_ownership(
        &self,
        ctx: &RequestContext,
        target: StudentId,
        action: &str,
    ) -> AuthErrorResult<Ownership> {
        if ctx.profile.as_ref().is_some_and(|p| p.id == target) {
            return Ok(Ownership::Owner);
        }

        let resource = Resource::student(ctx.tenant_id, target);
        match self.check(ctx.principal_id(), action, &resource).await {
            Ok(()) => Ok(Ownership::Delegated),
            Err(e) => {
                record_denial(action, &e);
                Err(e)
            }
        }
    }

    /// Policy check that fails closed: `false`, transport errors and
    /// timeouts all deny.
    pub async fn check(&self, subject: &str, action: &str, resource: &Resource) -> AuthErrorResult<()> {
        counter!("att.policy.checks").increment(1);
        let allowed = match self
            .bounded("policy check", self.policy.check(subject, action, resource))
            .await
        {
            Ok(Ok(allowed)) => allowed,
            Ok(Err(e)) | Err(e) => {
                warn!("Policy check for {} on {} failed, denying: {}", subject, resource, e);
                false
            }
        };

        if allowed {
            return Ok(());
        }
        Err(AuthError::PermissionDenied {
            subject: subject.to_string(),
            action: action.to_string(),
            resource: resource.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = T>,
    ) -> AuthErrorResult<T> {
        tokio::time::timeout(self.call_timeout, fut)
            .await
            .map_err(|_| AuthError::Timeout {
                operation,
                timeout_ms: self.call_timeout.as_millis() as u64,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

fn record_denial(stage: &str, error: &AuthError) {
    counter!(format!("att.pipeline.denied.{}", error.error_code().to_lowercase())).increment(1);
    warn!("{} denied: {}", stage, error);
}
