pub mod claims;
pub mod error;
pub mod identity_context;
pub mod jwt_validator;
pub mod memory_policy_client;
pub mod pipeline;
pub mod policy_client;
pub mod profile_store;
pub mod remote_policy_client;
pub mod remote_session_validator;
pub mod resource;
pub mod session_validator;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_context::IdentityContext;
pub use jwt_validator::JwtValidator;
pub use memory_policy_client::InMemoryPolicyClient;
pub use pipeline::{AuthorizationPipeline, Ownership, RequestContext, RoutePolicy};
pub use policy_client::PolicyClient;
pub use profile_store::ProfileStore;
pub use remote_policy_client::RemotePolicyClient;
pub use remote_session_validator::RemoteSessionValidator;
pub use resource::{Resource, scoped_object};
pub use session_validator::{JwtSessionValidator, SessionValidator};

/// Header carrying the caller's session token.
pub const SESSION_HEADER: &str = "X-Session-Token";

/// Optional header naming the college a request targets.
pub const TENANT_HEADER: &str = "X-College-Id";

#[cfg(test)]
mod tests;
