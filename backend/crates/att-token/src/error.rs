use att_core::TenantId;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Malformed token: {reason} {location}")]
    Malformed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Token expired at {expires_at} {location}")]
    Expired {
        expires_at: i64,
        location: ErrorLocation,
    },

    #[error("Token signature does not verify {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token issued for tenant {token_tenant}, redeemed in {redeemer_tenant} {location}")]
    TenantMismatch {
        token_tenant: TenantId,
        redeemer_tenant: TenantId,
        location: ErrorLocation,
    },

    #[error("Invalid token ttl: {message} {location}")]
    InvalidTtl {
        message: String,
        location: ErrorLocation,
    },

    #[error("QR rendering failed: {message} {location}")]
    QrRender {
        message: String,
        location: ErrorLocation,
    },
}

impl TokenError {
    /// Short label for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "malformed",
            Self::Expired { .. } => "expired",
            Self::InvalidSignature { .. } => "invalid_signature",
            Self::TenantMismatch { .. } => "tenant_mismatch",
            Self::InvalidTtl { .. } => "invalid_ttl",
            Self::QrRender { .. } => "qr_render",
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
