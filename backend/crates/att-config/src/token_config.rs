use crate::{ConfigError, ConfigErrorResult, MIN_SECRET_LENGTH};

use serde::Deserialize;

pub const MIN_TTL_SECS: u64 = 30;
pub const MAX_TTL_SECS: u64 = 86_400;
pub const DEFAULT_TTL_SECS: u64 = 30 * 60;

/// Proof token issuance settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub ttl_secs: u64,
    /// Master key; per-college signing keys are derived from it
    pub signing_secret: Option<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            signing_secret: None,
        }
    }
}

impl TokenConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs < MIN_TTL_SECS || self.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::token(format!(
                "token.ttl_secs must be {}-{}, got {}",
                MIN_TTL_SECS, MAX_TTL_SECS, self.ttl_secs
            )));
        }

        match self.signing_secret {
            None => Err(ConfigError::token("token.signing_secret is required")),
            Some(ref secret) if secret.len() < MIN_SECRET_LENGTH => Err(ConfigError::token(
                format!("token.signing_secret must be at least {MIN_SECRET_LENGTH} characters"),
            )),
            Some(_) => Ok(()),
        }
    }
}
