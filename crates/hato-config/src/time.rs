//! Reference timezone configuration for logbook timestamps.

use serde::{Deserialize, Serialize};

fn default_zone() -> String {
    String::from("America/Mexico_City")
}

const fn default_fallback_offset_hours() -> i32 {
    -6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeConfig {
    /// IANA zone name the logbook normalizes timestamps to.
    #[serde(default = "default_zone")]
    pub zone: String,

    /// Fixed UTC offset (whole hours) used when the zone name does not
    /// resolve. Approximates the reference zone.
    #[serde(default = "default_fallback_offset_hours")]
    pub fallback_offset_hours: i32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            fallback_offset_hours: default_fallback_offset_hours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = TimeConfig::default();
        assert_eq!(config.zone, "America/Mexico_City");
        assert_eq!(config.fallback_offset_hours, -6);
    }
}
