use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, HandlerConfig, LoggingConfig, PolicyConfig, ServerConfig,
    TokenConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub policy: PolicyConfig,
    pub token: TokenConfig,
    pub logging: LoggingConfig,
    pub handler: HandlerConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `.env` in the working directory, if any
    /// 2. ATT_CONFIG_DIR env var, else ./.att/ (created if missing)
    /// 3. config.toml if it exists, else defaults
    /// 4. ATT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: ATT_CONFIG_DIR env var > ./.att/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.policy.validate()?;
        self.token.validate()?;
        self.handler.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.handler.call_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.handler.timeout_secs)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {:?} (secret {}, identity_url {})",
            self.auth.mode,
            if self.auth.jwt_secret.is_some() { "set" } else { "unset" },
            self.auth.identity_url.as_deref().unwrap_or("-")
        );
        info!(
            "  policy: {:?} (read {}, write {})",
            self.policy.mode,
            self.policy.read_url.as_deref().unwrap_or("-"),
            self.policy.effective_write_url().unwrap_or("-")
        );
        info!("  token: ttl={}s", self.token.ttl_secs);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  handler: timeout={}s, call_timeout={}ms",
            self.handler.timeout_secs, self.handler.call_timeout_ms
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("ATT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ATT_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("ATT_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "ATT_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        if let Ok(mode) = std::env::var("ATT_AUTH_MODE") {
            self.auth.mode = mode.parse()?;
        }
        Self::apply_env_option_string("ATT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string("ATT_AUTH_IDENTITY_URL", &mut self.auth.identity_url);
        Self::apply_env_string("ATT_AUTH_LOGIN_URL", &mut self.auth.login_url);

        // Policy
        if let Ok(mode) = std::env::var("ATT_POLICY_MODE") {
            self.policy.mode = mode.parse()?;
        }
        Self::apply_env_option_string("ATT_POLICY_READ_URL", &mut self.policy.read_url);
        Self::apply_env_option_string("ATT_POLICY_WRITE_URL", &mut self.policy.write_url);

        // Token
        Self::apply_env_parse("ATT_TOKEN_TTL_SECS", &mut self.token.ttl_secs);
        Self::apply_env_option_string("ATT_TOKEN_SIGNING_SECRET", &mut self.token.signing_secret);

        // Logging
        Self::apply_env_parse("ATT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ATT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ATT_LOG_FILE", &mut self.logging.file);

        // Handler
        Self::apply_env_parse("ATT_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);
        Self::apply_env_parse(
            "ATT_HANDLER_CALL_TIMEOUT_MS",
            &mut self.handler.call_timeout_ms,
        );

        Ok(())
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
