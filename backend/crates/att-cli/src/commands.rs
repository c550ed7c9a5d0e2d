use crate::{attendance_commands::AttendanceCommands, qr_commands::QrCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// QR proof token operations
    Qr {
        #[command(subcommand)]
        action: QrCommands,
    },

    /// Redeem a scanned QR token
    Scan {
        /// Token string from the QR code
        token: String,

        /// Mark another student (requires a delegation relation)
        #[arg(long)]
        student_id: Option<i64>,
    },

    /// Attendance queries and overrides
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
}
