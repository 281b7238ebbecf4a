use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One immutable row of the bitácora — a logged user action.
///
/// Rows are append-only: no update or delete exists anywhere in the
/// system. `occurred_at` carries the reference-zone offset it was written
/// with, so the calendar day reads back exactly as recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub occurred_at: DateTime<FixedOffset>,
    pub actor: String,
    pub module: String,
    pub action: String,
    pub description: Option<String>,
    pub details: Option<String>,
    /// Arete of the animal the action relates to, if any.
    pub ear_tag: Option<String>,
}

/// Payload for appending a logbook entry. Timestamp and actor are filled
/// in by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLogEntry {
    pub module: String,
    pub action: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub ear_tag: Option<String>,
}

impl NewLogEntry {
    #[must_use]
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_ear_tag(mut self, ear_tag: impl Into<String>) -> Self {
        self.ear_tag = Some(ear_tag.into());
        self
    }
}
