mod auth_config;
mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod policy_config;
mod server_config;
mod token_config;

pub use auth_config::{AuthConfig, SessionMode};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use policy_config::{PolicyConfig, PolicyMode};
pub use server_config::ServerConfig;
pub use token_config::{MAX_TTL_SECS, MIN_TTL_SECS, TokenConfig};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "ATT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".att";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "attendance.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOGIN_URL: &str = "http://127.0.0.1:4433/self-service/login/browser";

/// Secrets shorter than this are rejected at startup.
const MIN_SECRET_LENGTH: usize = 32;
