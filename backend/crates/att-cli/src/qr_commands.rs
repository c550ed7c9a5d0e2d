use clap::Subcommand;

#[derive(Subcommand)]
pub enum QrCommands {
    /// Issue a token for a lecture (admin/faculty)
    Issue {
        #[arg(long)]
        course_id: i64,

        #[arg(long)]
        lecture_id: i64,

        /// Token lifetime in seconds (server default when omitted)
        #[arg(long)]
        ttl_secs: Option<u64>,
    },
}
