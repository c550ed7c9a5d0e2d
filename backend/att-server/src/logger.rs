use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the global logger.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - None = stdout, Some = append to file
/// * `colored` - Colored levels on stdout (ignored for file output)
#[track_caller]
pub fn initialize(
    log_level: att_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;

            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.target(),
                    ))
                })
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        colors.color(record.level()),
                        message,
                        record.target(),
                    ))
                })
                .chain(std::io::stdout())
        }
        // Plain stdout for journald / container log collectors
        None => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {} [{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    record.level(),
                    message,
                    record.target(),
                ))
            })
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={:?}, file={}", level_filter, path.display()),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing events into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
