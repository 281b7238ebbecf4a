//! Module and action tag constants for logbook entries.
//!
//! Tags are free-form TEXT in storage; these constants keep the spelling
//! consistent across every call site that appends to the bitácora.

/// Module tags — which part of the system performed the action.
pub mod modules {
    pub const ANIMALS: &str = "Animals";
    pub const CALVES: &str = "Calves";
    pub const PENS: &str = "Pens";
    pub const OWNERS: &str = "Owners";
    pub const USERS: &str = "Users";
    pub const SYSTEM: &str = "System";
    pub const BITACORA: &str = "Bitacora";

    /// All module tags, for validation and test iteration.
    pub const ALL: &[&str] = &[ANIMALS, CALVES, PENS, OWNERS, USERS, SYSTEM, BITACORA];
}

/// Action verb tags.
pub mod actions {
    pub const INSERT: &str = "INSERT";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
    pub const LOGIN: &str = "LOGIN";
    /// Recorded when the logbook report itself is generated.
    pub const GENERATE_REPORT: &str = "GENERAR_REPORTE";

    pub const ALL: &[&str] = &[INSERT, UPDATE, DELETE, LOGIN, GENERATE_REPORT];
}
