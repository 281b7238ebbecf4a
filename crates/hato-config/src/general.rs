//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit for list/query commands.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/query commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default operator login used when no `--user` flag is given.
    /// Empty means anonymous.
    #[serde(default)]
    pub operator: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            operator: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 50);
        assert!(config.operator.is_empty());
    }
}
