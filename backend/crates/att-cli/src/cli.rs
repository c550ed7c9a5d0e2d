use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
/// Read when `--session` is not given
pub const SESSION_ENV: &str = "ATT_SESSION_TOKEN";

#[derive(Parser)]
#[command(name = "att")]
#[command(about = "Attendance service CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Session token sent as X-Session-Token (falls back to ATT_SESSION_TOKEN)
    #[arg(long, global = true)]
    pub(crate) session: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
