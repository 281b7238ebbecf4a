use clap::Subcommand;

/// Owner commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OwnerCommands {
    /// Register an owner.
    Add {
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List owners.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an owner by id.
    Get { id: i64 },
    /// Update an owner's name and/or phone.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Remove an owner.
    Remove { id: i64 },
}
