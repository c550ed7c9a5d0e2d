use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOGIN_URL, MIN_SECRET_LENGTH};

use std::str::FromStr;

use serde::Deserialize;

/// How session tokens are turned into identities.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Session token is an HS256 JWT validated locally
    #[default]
    Jwt,
    /// Session token is exchanged with the identity provider's whoami endpoint
    Remote,
}

impl FromStr for SessionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jwt" => Ok(Self::Jwt),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::auth(format!(
                "auth.mode must be 'jwt' or 'remote', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub mode: SessionMode,
    /// HS256 secret (jwt mode)
    pub jwt_secret: Option<String>,
    /// Identity provider base URL (remote mode)
    pub identity_url: Option<String>,
    /// Where `/auth/login` sends the caller
    pub login_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::default(),
            jwt_secret: None,
            identity_url: None,
            login_url: String::from(DEFAULT_LOGIN_URL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.mode {
            SessionMode::Jwt => match self.jwt_secret {
                None => Err(ConfigError::auth(
                    "auth.jwt_secret is required when auth.mode = 'jwt'",
                )),
                Some(ref secret) if secret.len() < MIN_SECRET_LENGTH => {
                    Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {MIN_SECRET_LENGTH} characters"
                    )))
                }
                Some(_) => Ok(()),
            },
            SessionMode::Remote => match self.identity_url {
                Some(ref url) if url.starts_with("http://") || url.starts_with("https://") => {
                    Ok(())
                }
                Some(ref url) => Err(ConfigError::auth(format!(
                    "auth.identity_url must be an http(s) URL, got '{url}'"
                ))),
                None => Err(ConfigError::auth(
                    "auth.identity_url is required when auth.mode = 'remote'",
                )),
            },
        }
    }
}
