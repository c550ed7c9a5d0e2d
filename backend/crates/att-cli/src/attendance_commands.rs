use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// List attendance for a course
    Course {
        course_id: i64,

        /// Restrict to one lecture
        #[arg(long)]
        lecture_id: Option<i64>,
    },

    /// List a student's attendance history
    Student {
        student_id: i64,

        #[arg(long)]
        course_id: Option<i64>,
    },

    /// Override status on existing rows
    Update {
        #[arg(long)]
        student_id: i64,

        #[arg(long)]
        course_id: i64,

        #[arg(long)]
        lecture_id: i64,

        /// YYYY-MM-DD; every recorded day when omitted
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_parser = ["present", "absent"])]
        status: String,
    },

    /// Freeze a student and their attendance history (admin)
    Freeze { student_id: i64 },
}
