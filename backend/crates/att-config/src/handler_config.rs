use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const MIN_CALL_TIMEOUT_MS: u64 = 100;
pub const MAX_CALL_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 5_000;

/// Request processing limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Upper bound for a whole request
    pub timeout_secs: u64,
    /// Upper bound for each session, policy or database call made by a request
    pub call_timeout_ms: u64,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
        }
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "handler.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.call_timeout_ms < MIN_CALL_TIMEOUT_MS || self.call_timeout_ms > MAX_CALL_TIMEOUT_MS
        {
            return Err(ConfigError::config(format!(
                "handler.call_timeout_ms must be {}-{}, got {}",
                MIN_CALL_TIMEOUT_MS, MAX_CALL_TIMEOUT_MS, self.call_timeout_ms
            )));
        }

        if self.call_timeout_ms > self.timeout_secs * 1000 {
            return Err(ConfigError::config(
                "handler.call_timeout_ms cannot exceed handler.timeout_secs",
            ));
        }

        Ok(())
    }
}
