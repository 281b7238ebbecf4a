//! Bitácora repository.
//!
//! Append-only logbook of user actions. Appends never raise to the
//! caller: a failed full-width INSERT is retried against the narrow
//! first-generation column set before the entry is declared dropped, and
//! the outcome reports which path was taken. Range queries are inclusive
//! by calendar day on the date portion of the stored timestamp.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use hato_core::entities::{LogEntry, NewLogEntry};
use hato_core::session::ActorContext;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, last_insert_id, parse_stamped};
use crate::service::HerdService;

const SELECT_COLS: &str = "id, occurred_at, actor, module, action, description, details, ear_tag";

/// Which column set a logbook append landed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertMode {
    /// All columns written.
    Full,
    /// Retried without `details`/`ear_tag`, for a table the widening
    /// migration has not reached.
    Reduced,
}

/// Result of a logbook append.
///
/// Appends are deliberately infallible at the call site: the entry either
/// landed (possibly reduced) or was dropped with a warning. Callers that
/// care can inspect the outcome; mutation methods do not gate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The entry was written; `id` is its rowid.
    Recorded { id: i64, mode: InsertMode },
    /// Both insert attempts failed, or the entry was invalid.
    Dropped,
}

impl RecordOutcome {
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// Filter criteria for logbook queries beyond the plain date range.
#[derive(Debug, Default)]
pub struct LogQuery {
    /// Inclusive first calendar day.
    pub from: Option<NaiveDate>,
    /// Inclusive last calendar day.
    pub to: Option<NaiveDate>,
    pub module: Option<String>,
    pub actor: Option<String>,
    pub ear_tag: Option<String>,
    pub limit: Option<u32>,
}

impl HerdService {
    /// Append one logbook entry on behalf of an explicit actor.
    ///
    /// `module` and `action` are required; a blank value drops the entry
    /// with a warning. The timestamp comes from the service clock and the
    /// actor name from the resolution chain on `actor`. Never errors —
    /// see [`RecordOutcome`].
    pub async fn record_action(
        &self,
        new: NewLogEntry,
        actor: impl Into<ActorContext>,
    ) -> RecordOutcome {
        let module = new.module.trim();
        let action = new.action.trim();
        if module.is_empty() || action.is_empty() {
            warn!(
                module = new.module,
                action = new.action,
                "logbook entry dropped: module and action are required"
            );
            return RecordOutcome::Dropped;
        }

        let stamp = self.clock().now();
        let occurred_at = stamp.at.to_rfc3339();
        let resolved = actor.into().resolve();

        let full = self
            .db()
            .conn()
            .execute(
                "INSERT INTO bitacora (occurred_at, actor, module, action, description, details, ear_tag)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    occurred_at.as_str(),
                    resolved.name.as_str(),
                    module,
                    action,
                    new.description.as_deref(),
                    new.details.as_deref(),
                    new.ear_tag.as_deref()
                ],
            )
            .await;

        match full {
            Ok(_) => match last_insert_id(self.db().conn()).await {
                Ok(id) => RecordOutcome::Recorded {
                    id,
                    mode: InsertMode::Full,
                },
                Err(error) => {
                    warn!(%error, module, action, "logbook row landed but id read failed");
                    RecordOutcome::Recorded {
                        id: 0,
                        mode: InsertMode::Full,
                    }
                }
            },
            Err(error) => {
                warn!(%error, module, action, "full logbook insert failed; retrying reduced");
                self.record_reduced(&occurred_at, &resolved.name, module, action, new.description.as_deref())
                    .await
            }
        }
    }

    /// Reduced-column retry against the first-generation table shape.
    async fn record_reduced(
        &self,
        occurred_at: &str,
        actor: &str,
        module: &str,
        action: &str,
        description: Option<&str>,
    ) -> RecordOutcome {
        let reduced = self
            .db()
            .conn()
            .execute(
                "INSERT INTO bitacora (occurred_at, actor, module, action, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![occurred_at, actor, module, action, description],
            )
            .await;

        match reduced {
            Ok(_) => match last_insert_id(self.db().conn()).await {
                Ok(id) => RecordOutcome::Recorded {
                    id,
                    mode: InsertMode::Reduced,
                },
                Err(_) => RecordOutcome::Recorded {
                    id: 0,
                    mode: InsertMode::Reduced,
                },
            },
            Err(error) => {
                warn!(%error, module, action, "logbook entry dropped after reduced retry");
                RecordOutcome::Dropped
            }
        }
    }

    /// Append an entry attributed to the service session.
    ///
    /// Mutation methods call this after their write succeeds; the caller
    /// contract lives here instead of in every caller.
    pub(crate) async fn log_action(&self, new: NewLogEntry) -> RecordOutcome {
        self.record_action(new, ActorContext::from(self.session())).await
    }

    /// Entries whose calendar day falls inside `[from, to]`, most recent
    /// first.
    ///
    /// The comparison runs on the leading `YYYY-MM-DD` of the stored
    /// text, so the day boundary is the reference zone's, not UTC's. An
    /// inverted range is not re-validated here; it simply matches
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LogEntry>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM bitacora
             WHERE substr(occurred_at, 1, 10) >= ?1 AND substr(occurred_at, 1, 10) <= ?2
             ORDER BY occurred_at DESC, id DESC"
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![
                    from.format("%Y-%m-%d").to_string(),
                    to.format("%Y-%m-%d").to_string()
                ],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Query logbook entries with optional filters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_log(&self, filter: &LogQuery) -> Result<Vec<LogEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(from) = filter.from {
            params.push(libsql::Value::Text(from.format("%Y-%m-%d").to_string()));
            conditions.push(format!("substr(occurred_at, 1, 10) >= ?{}", params.len()));
        }
        if let Some(to) = filter.to {
            params.push(libsql::Value::Text(to.format("%Y-%m-%d").to_string()));
            conditions.push(format!("substr(occurred_at, 1, 10) <= ?{}", params.len()));
        }
        if let Some(ref module) = filter.module {
            params.push(libsql::Value::Text(module.clone()));
            conditions.push(format!("module = ?{}", params.len()));
        }
        if let Some(ref actor) = filter.actor {
            params.push(libsql::Value::Text(actor.clone()));
            conditions.push(format!("actor = ?{}", params.len()));
        }
        if let Some(ref ear_tag) = filter.ear_tag {
            params.push(libsql::Value::Text(ear_tag.clone()));
            conditions.push(format!("ear_tag = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM bitacora {where_clause}
             ORDER BY occurred_at DESC, id DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}

/// Convert a libSQL row to a `LogEntry` struct.
fn row_to_entry(row: &libsql::Row) -> Result<LogEntry, DatabaseError> {
    Ok(LogEntry {
        id: row.get::<i64>(0)?,
        occurred_at: parse_stamped(&row.get::<String>(1)?)?,
        actor: row.get::<String>(2)?,
        module: row.get::<String>(3)?,
        action: row.get::<String>(4)?,
        description: get_opt_string(row, 5)?,
        details: get_opt_string(row, 6)?,
        ear_tag: get_opt_string(row, 7)?,
    })
}
