//! Logbook report rendering configuration.

use serde::{Deserialize, Serialize};

const fn default_preview_chars() -> usize {
    80
}

const fn default_rows_per_page() -> usize {
    40
}

fn default_output_dir() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Maximum characters of the description preview column before the
    /// ellipsis is applied.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Data rows per rendered page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,

    /// Directory report files default into when no explicit path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
            rows_per_page: default_rows_per_page(),
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReportConfig::default();
        assert_eq!(config.preview_chars, 80);
        assert_eq!(config.rows_per_page, 40);
        assert_eq!(config.output_dir, ".");
    }
}
