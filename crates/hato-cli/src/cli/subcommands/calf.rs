use clap::Subcommand;

/// Calf commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CalfCommands {
    /// Register a calf from a breeding date. The expected birth date is
    /// derived automatically.
    Register {
        /// Arete (ear tag) for the calf.
        ear_tag: String,
        /// Arete of the dam (must be a cow in the herd).
        #[arg(long)]
        dam: String,
        /// Breeding date (YYYY-MM-DD).
        #[arg(long)]
        breeding_date: String,
        /// Sex if already known: female, male.
        #[arg(long)]
        sex: Option<String>,
    },
    /// List calves.
    List {
        /// Filter by dam arete.
        #[arg(long)]
        dam: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a calf by arete.
    Get { ear_tag: String },
    /// Record the actual birth.
    Birth {
        ear_tag: String,
        /// Birth date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// Birth weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,
        /// Sex: female, male.
        #[arg(long)]
        sex: Option<String>,
    },
    /// Remove a calf record.
    Remove { ear_tag: String },
}
