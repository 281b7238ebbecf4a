use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An owner (propietario) of animals in the herd.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
