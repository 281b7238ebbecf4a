use clap::Subcommand;

use crate::cli::subcommands::{
    AnimalCommands, CalfCommands, LogCommands, OwnerCommands, PenCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Activity logbook (bitácora).
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Animals in the herd.
    Animal {
        #[command(subcommand)]
        action: AnimalCommands,
    },
    /// Calves, from breeding to birth.
    Calf {
        #[command(subcommand)]
        action: CalfCommands,
    },
    /// Pens (corrales).
    Pen {
        #[command(subcommand)]
        action: PenCommands,
    },
    /// Owners (propietarios).
    Owner {
        #[command(subcommand)]
        action: OwnerCommands,
    },
    /// Application users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
