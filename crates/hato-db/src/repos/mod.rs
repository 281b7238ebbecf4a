//! Repository modules implementing CRUD operations for all Hato entities.
//!
//! Each module adds methods to `HerdService` via `impl HerdService` blocks.
//! Every mutation appends a bitácora entry through
//! [`HerdService::record_action`](crate::service::HerdService::record_action).

pub mod animal;
pub mod bitacora;
pub mod calf;
pub mod owner;
pub mod pen;
pub mod user;
