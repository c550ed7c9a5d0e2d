//! att - attendance service CLI
//!
//! # Examples
//!
//! ```bash
//! # Issue a QR token for lecture 55 of course 10 (faculty session)
//! att --session "$FACULTY_TOKEN" qr issue --course-id 10 --lecture-id 55 --pretty
//!
//! # Redeem it as a student
//! ATT_SESSION_TOKEN="$STUDENT_TOKEN" att scan "$TOKEN"
//!
//! # Correct a row
//! att attendance update --student-id 1 --course-id 10 --lecture-id 55 --status absent
//! ```

mod attendance_commands;
mod cli;
mod commands;
mod qr_commands;

use crate::{
    attendance_commands::AttendanceCommands,
    cli::{Cli, SESSION_ENV},
    commands::Commands,
    qr_commands::QrCommands,
};

use att_cli::Client;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = cli.session.or_else(|| std::env::var(SESSION_ENV).ok());
    let client = Client::new(&cli.server, session.as_deref());

    let result = match cli.command {
        Commands::Qr { action } => match action {
            QrCommands::Issue {
                course_id,
                lecture_id,
                ttl_secs,
            } => client.issue_qr(course_id, lecture_id, ttl_secs).await,
        },

        Commands::Scan { token, student_id } => client.scan(&token, student_id).await,

        Commands::Attendance { action } => match action {
            AttendanceCommands::Course {
                course_id,
                lecture_id,
            } => client.course_attendance(course_id, lecture_id).await,
            AttendanceCommands::Student {
                student_id,
                course_id,
            } => client.student_attendance(student_id, course_id).await,
            AttendanceCommands::Update {
                student_id,
                course_id,
                lecture_id,
                date,
                status,
            } => {
                client
                    .update_status(student_id, course_id, lecture_id, date.as_deref(), &status)
                    .await
            }
            AttendanceCommands::Freeze { student_id } => client.freeze_student(student_id).await,
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.status() == Some(401) {
                eprintln!("Hint: pass --session or set {}", SESSION_ENV);
            }
            ExitCode::FAILURE
        }
    }
}
