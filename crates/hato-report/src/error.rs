//! Report generation errors.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use hato_db::error::DatabaseError;

/// Errors surfaced by report generation.
///
/// Range and empty-result violations are caught before any file is
/// touched, so a failed generation never leaves a document behind.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested period is inverted.
    #[error("invalid report range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// The period matched no logbook entries.
    #[error("no logbook entries between {from} and {to}")]
    NoRecords { from: NaiveDate, to: NaiveDate },

    /// The logbook query itself failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Writing the rendered document failed.
    #[error("failed to write report to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
