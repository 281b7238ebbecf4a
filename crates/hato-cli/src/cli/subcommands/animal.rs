use clap::Subcommand;

/// Animal commands, keyed by arete.
#[derive(Clone, Debug, Subcommand)]
pub enum AnimalCommands {
    /// Register an animal.
    Register {
        /// Arete (ear tag).
        ear_tag: String,
        /// Sex: female, male.
        #[arg(long)]
        sex: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        /// Birth date (YYYY-MM-DD).
        #[arg(long)]
        birth_date: Option<String>,
        /// Owner id.
        #[arg(long)]
        owner: Option<i64>,
        /// Pen id to house the animal in.
        #[arg(long)]
        pen: Option<i64>,
    },
    /// List animals.
    List {
        /// Filter by status: active, sold, deceased.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an animal by arete.
    Get { ear_tag: String },
    /// Move an animal into a pen, or out to pasture when no pen is given.
    Move {
        ear_tag: String,
        /// Destination pen id (omit for pasture).
        #[arg(long)]
        pen: Option<i64>,
    },
    /// Change an animal's lifecycle status.
    Status {
        ear_tag: String,
        /// New status: sold, deceased.
        status: String,
    },
    /// Remove an animal record.
    Remove { ear_tag: String },
}
