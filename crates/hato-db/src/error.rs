//! Database error types for hato-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A lookup referenced a row that does not exist.
    #[error("{entity} '{key}' not found")]
    NotFound {
        /// Entity kind, e.g. `"animal"`.
        entity: &'static str,
        /// Key that was looked up.
        key: String,
    },

    /// A unique key is already taken.
    #[error("{entity} '{key}' already exists")]
    Duplicate {
        /// Entity kind, e.g. `"owner"`.
        entity: &'static str,
        /// Key that collided.
        key: String,
    },

    /// A pen is at capacity and cannot house another animal.
    #[error("Pen '{pen}' is full ({capacity} head)")]
    PenFull {
        /// Pen name.
        pen: String,
        /// Configured capacity.
        capacity: i64,
    },

    /// A foreign key still points at the row being removed.
    #[error("Row is still referenced: {0}")]
    Constraint(String),

    /// Invalid state encountered (e.g., bad data in DB or a
    /// disallowed status transition).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Caller-supplied data failed validation before reaching SQL.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Maps a raw libSQL failure from an INSERT or UPDATE to a domain
    /// error.
    ///
    /// Unique violations become [`DatabaseError::Duplicate`] for the
    /// given entity/key pair; foreign key violations become
    /// [`DatabaseError::Constraint`]; everything else passes through.
    pub(crate) fn from_write(err: libsql::Error, entity: &'static str, key: &str) -> Self {
        let text = err.to_string();
        if text.contains("UNIQUE constraint failed") {
            Self::Duplicate {
                entity,
                key: key.to_owned(),
            }
        } else if text.contains("FOREIGN KEY constraint failed") {
            Self::Constraint(text)
        } else {
            Self::LibSql(err)
        }
    }

    /// Maps a raw libSQL failure from a DELETE to a domain error.
    pub(crate) fn from_delete(err: libsql::Error) -> Self {
        let text = err.to_string();
        if text.contains("FOREIGN KEY constraint failed") {
            Self::Constraint(text)
        } else {
            Self::LibSql(err)
        }
    }
}

impl From<hato_core::errors::CoreError> for DatabaseError {
    fn from(err: hato_core::errors::CoreError) -> Self {
        Self::InvalidState(err.to_string())
    }
}
