//! Entity structs for all Hato domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`/`Deserialize` for JSON output from the CLI.

mod animal;
mod calf;
mod log_entry;
mod owner;
mod pen;
mod user;

pub use animal::{Animal, NewAnimal};
pub use calf::{Calf, NewCalf};
pub use log_entry::{LogEntry, NewLogEntry};
pub use owner::Owner;
pub use pen::{Pen, PenOccupancy};
pub use user::User;
