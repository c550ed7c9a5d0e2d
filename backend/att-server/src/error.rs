use thiserror::Error;

/// Startup failures. Request-time failures are `ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] att_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] att_db::DbError),

    #[error("Collaborator setup failed: {0}")]
    Collaborator(#[from] att_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics recorder error: {message}")]
    Metrics { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
