use att_server::{AppState, DbProfileStore, build_router, error::ServerError, logger, metrics};

use att_auth::{
    AuthorizationPipeline, InMemoryPolicyClient, JwtSessionValidator, PolicyClient,
    RemotePolicyClient, RemoteSessionValidator, SessionValidator,
};
use att_config::{Config, PolicyMode, SessionMode};
use att_db::{AttendanceLedger, LectureRepository, StudentRepository};
use att_token::ProofTokenCodec;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir).map_err(ServerError::from)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting att-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics_handle = match metrics::install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Prometheus recorder not installed, /metrics disabled: {}", e);
            None
        }
    };

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = att_db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready (migrations applied)");

    let call_timeout = config.call_timeout();
    let sessions = session_validator(&config, call_timeout)?;
    let policy = policy_client(&config, call_timeout)?;
    let students = StudentRepository::new(pool.clone());
    let profiles = Arc::new(DbProfileStore::new(students.clone()));
    let pipeline = Arc::new(AuthorizationPipeline::new(
        sessions,
        policy,
        profiles,
        call_timeout,
    ));

    let signing_secret = config
        .token
        .signing_secret
        .clone()
        .ok_or_else(|| att_config::ConfigError::token("token.signing_secret is required"))?;
    let tokens = ProofTokenCodec::new(signing_secret, Duration::from_secs(config.token.ttl_secs));

    let app_state = AppState {
        ledger: AttendanceLedger::new(pool.clone()),
        lectures: LectureRepository::new(pool.clone()),
        students,
        pool,
        pipeline,
        tokens,
        call_timeout,
        request_timeout: config.request_timeout(),
        login_url: config.auth.login_url.clone(),
        metrics: metrics_handle,
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn session_validator(
    config: &Config,
    call_timeout: Duration,
) -> Result<Arc<dyn SessionValidator>, ServerError> {
    match config.auth.mode {
        SessionMode::Jwt => {
            let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
            info!("Sessions: HS256 JWT validated locally");
            Ok(Arc::new(JwtSessionValidator::new(secret.as_bytes())))
        }
        SessionMode::Remote => {
            let url = config.auth.identity_url.as_deref().unwrap_or_default();
            info!("Sessions: identity provider at {}", url);
            Ok(Arc::new(RemoteSessionValidator::new(url, call_timeout)?))
        }
    }
}

fn policy_client(
    config: &Config,
    call_timeout: Duration,
) -> Result<Arc<dyn PolicyClient>, ServerError> {
    match config.policy.mode {
        PolicyMode::Remote => {
            let read_url = config.policy.read_url.as_deref().unwrap_or_default();
            let write_url = config.policy.effective_write_url().unwrap_or(read_url);
            info!("Policy engine: read {}, write {}", read_url, write_url);
            Ok(Arc::new(RemotePolicyClient::new(
                read_url,
                write_url,
                call_timeout,
            )?))
        }
        PolicyMode::Memory => {
            warn!("Policy engine: IN-MEMORY relation store, development only");
            Ok(Arc::new(InMemoryPolicyClient::new()))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
