//! # hato-config
//!
//! Layered configuration loading for Hato using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HATO_*` prefix, `__` as separator)
//! 2. Local `hato.toml` in the working directory
//! 3. User-level `~/.config/hato/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HATO_DATABASE__PATH` -> `database.path`,
//! `HATO_TIME__ZONE` -> `time.zone`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hato_config::HatoConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = HatoConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod report;
mod time;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use report::ReportConfig;
pub use time::TimeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HatoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HatoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the working directory before building the
    /// figment. This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: user-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: working-directory config
        let local_path = PathBuf::from("hato.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: environment variables (highest priority)
        figment.merge(Env::prefixed("HATO_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hato").join("config.toml"))
    }
}
