use crate::{ProofTokenPayload, Result as TokenErrorResult, TokenError, render_svg};

use att_core::{CourseId, LectureId, TenantId};

use std::panic::Location;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use log::debug;
use metrics::counter;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TENANT_KEY_CONTEXT: &[u8] = b"att-tenant-key:";
const SEPARATOR: char = '.';

/// A freshly issued token, ready to hand to a client.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// SVG QR code encoding `token`
    pub qr_svg: String,
    pub payload: ProofTokenPayload,
}

/// Issues and redeems signed proof tokens.
///
/// Holds only immutable key material, so one instance is shared across
/// requests without locking.
#[derive(Clone)]
pub struct ProofTokenCodec {
    signing_secret: Vec<u8>,
    default_ttl: Duration,
}

impl ProofTokenCodec {
    pub fn new(signing_secret: impl AsRef<[u8]>, default_ttl: Duration) -> Self {
        Self {
            signing_secret: signing_secret.as_ref().to_vec(),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn issue(
        &self,
        tenant_id: TenantId,
        course_id: CourseId,
        lecture_id: LectureId,
        ttl: Option<Duration>,
    ) -> TokenErrorResult<IssuedToken> {
        self.issue_at(tenant_id, course_id, lecture_id, ttl, Utc::now())
    }

    #[track_caller]
    pub fn issue_at(
        &self,
        tenant_id: TenantId,
        course_id: CourseId,
        lecture_id: LectureId,
        ttl: Option<Duration>,
        now: DateTime<Utc>,
    ) -> TokenErrorResult<IssuedToken> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        if ttl.is_zero() {
            return Err(TokenError::InvalidTtl {
                message: "ttl must be positive".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let ttl_secs = i64::try_from(ttl.as_secs()).map_err(|_| TokenError::InvalidTtl {
            message: format!("ttl of {}s is out of range", ttl.as_secs()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let issued_at = now.timestamp();
        let payload = ProofTokenPayload {
            tenant_id,
            course_id,
            lecture_id,
            issued_at,
            expires_at: issued_at.saturating_add(ttl_secs),
        };

        let token = self.encode(&payload)?;
        let qr_svg = render_svg(&token)?;

        counter!("att.tokens.issued").increment(1);
        debug!(
            "Issued token for tenant {} course {} lecture {} (expires {})",
            tenant_id, course_id, lecture_id, payload.expires_at
        );

        Ok(IssuedToken {
            token,
            qr_svg,
            payload,
        })
    }

    pub fn redeem(&self, tenant_id: TenantId, token: &str) -> TokenErrorResult<ProofTokenPayload> {
        self.redeem_at(tenant_id, token, Utc::now())
    }

    /// Verify and decode `token` for a redeemer in `tenant_id`.
    ///
    /// Checks run structure, signature, tenant, then expiry; the first
    /// failure wins.
    pub fn redeem_at(
        &self,
        tenant_id: TenantId,
        token: &str,
        now: DateTime<Utc>,
    ) -> TokenErrorResult<ProofTokenPayload> {
        let result = self.verify(tenant_id, token, now.timestamp());
        match &result {
            Ok(_) => counter!("att.tokens.redeemed").increment(1),
            Err(e) => counter!(format!("att.tokens.rejected.{}", e.reason())).increment(1),
        }
        result
    }

    #[track_caller]
    fn verify(&self, tenant_id: TenantId, token: &str, now: i64) -> TokenErrorResult<ProofTokenPayload> {
        let (encoded_payload, encoded_signature) = token
            .trim()
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("missing signature segment"))?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(encoded_payload)
            .map_err(|e| malformed(&format!("payload is not base64url: {e}")))?;
        let signature = URL_SAFE_NO_PAD
            .decode(encoded_signature)
            .map_err(|e| malformed(&format!("signature is not base64url: {e}")))?;
        let payload: ProofTokenPayload = serde_json::from_slice(&payload_bytes)
            .map_err(|e| malformed(&format!("payload is not valid json: {e}")))?;

        // The claimed tenant selects the key; a forged tenant field fails here
        self.tenant_mac(payload.tenant_id)?
            .chain_update(&payload_bytes)
            .verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if payload.tenant_id != tenant_id {
            return Err(TokenError::TenantMismatch {
                token_tenant: payload.tenant_id,
                redeemer_tenant: tenant_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if payload.is_expired_at(now) {
            return Err(TokenError::Expired {
                expires_at: payload.expires_at,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(payload)
    }

    fn encode(&self, payload: &ProofTokenPayload) -> TokenErrorResult<String> {
        let payload_bytes =
            serde_json::to_vec(payload).map_err(|e| malformed(&format!("unserializable payload: {e}")))?;
        let signature = self
            .tenant_mac(payload.tenant_id)?
            .chain_update(&payload_bytes)
            .finalize()
            .into_bytes();

        Ok(format!(
            "{}{}{}",
            URL_SAFE_NO_PAD.encode(&payload_bytes),
            SEPARATOR,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// MAC keyed with HMAC(signing_secret, context || tenant_id)
    fn tenant_mac(&self, tenant_id: TenantId) -> TokenErrorResult<HmacSha256> {
        let tenant_key = new_mac(&self.signing_secret)?
            .chain_update(TENANT_KEY_CONTEXT)
            .chain_update(tenant_id.to_string().as_bytes())
            .finalize()
            .into_bytes();
        new_mac(&tenant_key)
    }
}

#[track_caller]
fn new_mac(key: &[u8]) -> TokenErrorResult<HmacSha256> {
    HmacSha256::new_from_slice(key).map_err(|_| TokenError::InvalidSignature {
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn malformed(reason: &str) -> TokenError {
    TokenError::Malformed {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
