use att_core::{Role, StudentId, StudentStatus, TenantId};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Tenant mismatch: identity belongs to {identity_tenant}, request targets {requested_tenant} {location}")]
    TenantMismatch {
        identity_tenant: TenantId,
        requested_tenant: TenantId,
        location: ErrorLocation,
    },

    #[error("Insufficient role: {role} not in {allowed:?} {location}")]
    InsufficientRole {
        role: Role,
        allowed: Vec<Role>,
        location: ErrorLocation,
    },

    #[error("No student profile for principal {principal_id} in tenant {tenant_id} {location}")]
    ProfileNotFound {
        tenant_id: TenantId,
        principal_id: String,
        location: ErrorLocation,
    },

    #[error("Student {student_id} is {} {location}", status.as_str())]
    ProfileInactive {
        student_id: StudentId,
        status: StudentStatus,
        location: ErrorLocation,
    },

    #[error("Profile lookup failed: {message} {location}")]
    ProfileLookup {
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: {subject} may not {action} {resource} {location}")]
    PermissionDenied {
        subject: String,
        action: String,
        resource: String,
        location: ErrorLocation,
    },

    #[error("{service} unavailable: {message} {location}")]
    Upstream {
        service: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{operation} timed out after {timeout_ms}ms {location}")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code, also used as the metrics label for denials
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::TokenExpired { .. } => "SESSION_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::TenantMismatch { .. } => "TENANT_MISMATCH",
            Self::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Self::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            Self::ProfileInactive { .. } => "PROFILE_INACTIVE",
            Self::ProfileLookup { .. } => "PROFILE_LOOKUP_FAILED",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
        }
    }

    /// True for failures that mean "who are you?" rather than "you may not".
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated { .. }
                | Self::TokenExpired { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }

    /// True for failures reported to the caller as a generic Forbidden.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::TenantMismatch { .. }
                | Self::InsufficientRole { .. }
                | Self::ProfileNotFound { .. }
                | Self::ProfileInactive { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
