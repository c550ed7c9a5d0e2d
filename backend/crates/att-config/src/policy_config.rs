use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    /// Relation-tuple service over HTTP
    #[default]
    Remote,
    /// In-process tuple set; development only
    Memory,
}

impl FromStr for PolicyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::policy(format!(
                "policy.mode must be 'remote' or 'memory', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PolicyConfig {
    pub mode: PolicyMode,
    /// Base URL for check queries
    pub read_url: Option<String>,
    /// Base URL for tuple writes. Defaults to `read_url`
    pub write_url: Option<String>,
}

impl PolicyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.mode == PolicyMode::Memory {
            return Ok(());
        }

        let read_url = self.read_url.as_deref().ok_or_else(|| {
            ConfigError::policy("policy.read_url is required when policy.mode = 'remote'")
        })?;

        for (field, url) in [("read_url", Some(read_url)), ("write_url", self.write_url.as_deref())] {
            if let Some(url) = url
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ConfigError::policy(format!(
                    "policy.{field} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// Write endpoint, falling back to the read endpoint.
    pub fn effective_write_url(&self) -> Option<&str> {
        self.write_url.as_deref().or(self.read_url.as_deref())
    }
}
