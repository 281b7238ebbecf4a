//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and applies them in
//! version order on database open. Applied versions are recorded in
//! `schema_migrations`, so re-opening an up-to-date database is a no-op
//! and an old database is upgraded exactly once per version.

use tracing::info;

use crate::HatoDb;
use crate::error::DatabaseError;

/// One schema version: a monotonically increasing number, a short name
/// for logs, and the SQL batch that brings a database up to it.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    /// Version number recorded in `schema_migrations`.
    pub version: i64,
    /// Short name, e.g. `"initial"`.
    pub name: &'static str,
    /// SQL batch to execute.
    pub sql: &'static str,
}

/// Every schema version, oldest first.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial",
        sql: include_str!("../migrations/001_initial.sql"),
    },
    Migration {
        version: 2,
        name: "widen_bitacora",
        sql: include_str!("../migrations/002_widen_bitacora.sql"),
    },
];

impl HatoDb {
    /// Bring the schema up to the latest version.
    ///
    /// Safe to call repeatedly; versions already listed in
    /// `schema_migrations` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Migration`] if ledger bookkeeping or any
    /// migration batch fails.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.conn()
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS schema_migrations (
                    version     INTEGER PRIMARY KEY,
                    name        TEXT NOT NULL,
                    applied_at  TEXT NOT NULL
                )",
            )
            .await
            .map_err(|e| DatabaseError::Migration(format!("schema_migrations: {e}")))?;

        let applied = self.applied_versions().await?;
        for migration in MIGRATIONS {
            if applied.contains(&migration.version) {
                continue;
            }
            self.apply(migration).await?;
        }
        Ok(())
    }

    /// Versions already recorded in the ledger, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Migration`] if the ledger cannot be read.
    pub async fn applied_versions(&self) -> Result<Vec<i64>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT version FROM schema_migrations ORDER BY version", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("reading ledger: {e}")))?;
        let mut versions = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::Migration(format!("reading ledger: {e}")))?
        {
            versions.push(
                row.get::<i64>(0)
                    .map_err(|e| DatabaseError::Migration(format!("reading ledger: {e}")))?,
            );
        }
        Ok(versions)
    }

    async fn apply(&self, migration: &Migration) -> Result<(), DatabaseError> {
        self.conn()
            .execute_batch(migration.sql)
            .await
            .map_err(|e| {
                DatabaseError::Migration(format!(
                    "{:03}_{}: {e}",
                    migration.version, migration.name
                ))
            })?;
        self.conn()
            .execute(
                "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
                libsql::params![
                    migration.version,
                    migration.name,
                    chrono::Utc::now().to_rfc3339()
                ],
            )
            .await
            .map_err(|e| {
                DatabaseError::Migration(format!(
                    "recording {:03}_{}: {e}",
                    migration.version, migration.name
                ))
            })?;
        info!(
            version = migration.version,
            name = migration.name,
            "applied schema migration"
        );
        Ok(())
    }
}
