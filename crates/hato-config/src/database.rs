//! Database file configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("hato.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the embedded database file. `:memory:` is accepted for
    /// throwaway runs and tests.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
