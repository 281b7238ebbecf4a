use clap::Subcommand;

/// Application user commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user.
    Add {
        login: String,
        /// Human display name.
        #[arg(long)]
        name: Option<String>,
        /// Role name (e.g. Admin).
        #[arg(long)]
        role: Option<String>,
    },
    /// List users.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Deactivate a user. Deactivated users cannot log in.
    Deactivate { login: String },
    /// Verify a login and record the event in the logbook.
    Login { login: String },
}
