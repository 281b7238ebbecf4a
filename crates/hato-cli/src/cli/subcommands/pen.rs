use clap::Subcommand;

/// Pen commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PenCommands {
    /// Register a pen.
    Add {
        name: String,
        /// Head capacity (must be positive).
        #[arg(long)]
        capacity: i64,
    },
    /// List pens with their current occupancy.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a pen by id.
    Get { id: i64 },
    /// Remove a pen.
    Remove { id: i64 },
}
