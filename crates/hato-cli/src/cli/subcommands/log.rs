use clap::Subcommand;

/// Logbook commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Query logbook entries.
    Query {
        /// First calendar day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Last calendar day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
        /// Filter by module tag (e.g. Animals).
        #[arg(long)]
        module: Option<String>,
        /// Filter by recorded actor name.
        #[arg(long)]
        actor: Option<String>,
        /// Filter by affected arete.
        #[arg(long)]
        tag: Option<String>,
        /// Maximum number of entries.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Generate the paginated report document for a period.
    Report {
        /// First calendar day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        from: String,
        /// Last calendar day, inclusive (YYYY-MM-DD).
        #[arg(long)]
        to: String,
        /// Output file or directory (defaults to the configured report directory).
        #[arg(long)]
        out: Option<String>,
    },
}
