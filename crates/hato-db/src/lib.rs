//! # hato-db
//!
//! libSQL database operations for Hato herd records.
//!
//! Handles all relational state: owners, pens, animals, calves, users,
//! and the bitácora activity logbook. One local single-file database,
//! upgraded in place by versioned migrations on open.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) — embedded, no
//! server process, stable API.

pub mod clock;
pub mod error;
pub mod helpers;
pub mod migrations;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Hato state operations.
///
/// Wraps a libSQL database and connection. Repository methods live on
/// [`service::HerdService`], which owns one of these.
pub struct HatoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HatoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign keys and brings the schema up to the latest
    /// version before returning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hato_db = Self { db, conn };
        hato_db.ensure_schema().await?;
        Ok(hato_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
