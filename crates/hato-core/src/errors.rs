//! Cross-cutting error types for Hato.
//!
//! Domain-specific errors (`DatabaseError`, `ReportError`, `ConfigError`)
//! live in their respective crates; everything converges on `anyhow` at
//! the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any Hato crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not parse into a typed value (enum, date, tag).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data failed validation (blank name, bad range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
