use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// An application user. Backs the session identity recorded in the
/// logbook; credential handling is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build the immutable session identity for this user.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::for_user(
            self.login.clone(),
            self.display_name.clone(),
            self.role.clone(),
        )
    }
}
