//! Reference-zone clock for logbook timestamps.
//!
//! The ranch operates in one civil timezone, so every logbook row is
//! stamped in a single reference zone no matter where the binary runs.
//! The zone is resolved once at startup through a three-step chain:
//!
//! 1. the configured IANA zone name (e.g. `"America/Mexico_City"`),
//! 2. a configured fixed UTC offset in whole hours,
//! 3. the host's local clock.
//!
//! Each step that fails is logged, and every [`Stamp`] carries the
//! strategy that produced it so fallbacks stay visible in output.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which strategy produced a clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampSource {
    /// Resolved from an IANA zone name.
    NamedZone,
    /// Resolved from a configured fixed UTC offset.
    FixedOffset,
    /// Fell back to the host's local clock.
    LocalClock,
}

impl StampSource {
    /// Stable string form, used in CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NamedZone => "named_zone",
            Self::FixedOffset => "fixed_offset",
            Self::LocalClock => "local_clock",
        }
    }
}

impl std::fmt::Display for StampSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clock reading together with the strategy that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Stamp {
    /// The instant, carrying the reference zone's offset.
    pub at: DateTime<FixedOffset>,
    /// Strategy that produced the reading.
    pub source: StampSource,
}

/// Wall clock pinned to the herd's reference zone.
///
/// Construction resolves the fallback chain once; after that every
/// [`LogClock::now`] uses the same strategy, so all rows written in one
/// run share one timestamp representation.
#[derive(Debug, Clone)]
pub struct LogClock {
    zone: Option<chrono_tz::Tz>,
    offset: Option<FixedOffset>,
}

impl LogClock {
    /// Builds a clock from a zone name and a fallback offset in whole hours.
    ///
    /// An unknown zone name or an out-of-range offset disables that
    /// step of the chain with a warning rather than failing.
    #[must_use]
    pub fn new(zone: &str, fallback_offset_hours: i32) -> Self {
        let zone = match zone.parse::<chrono_tz::Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                warn!(zone, "unknown timezone name; falling back to fixed offset");
                None
            }
        };
        let offset = fallback_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt);
        if offset.is_none() {
            warn!(
                hours = fallback_offset_hours,
                "offset out of range; falling back to the host clock"
            );
        }
        Self { zone, offset }
    }

    /// The strategy this clock settled on.
    #[must_use]
    pub const fn source(&self) -> StampSource {
        if self.zone.is_some() {
            StampSource::NamedZone
        } else if self.offset.is_some() {
            StampSource::FixedOffset
        } else {
            StampSource::LocalClock
        }
    }

    /// Reads the current instant in the reference zone.
    #[must_use]
    pub fn now(&self) -> Stamp {
        if let Some(tz) = self.zone {
            return Stamp {
                at: Utc::now().with_timezone(&tz).fixed_offset(),
                source: StampSource::NamedZone,
            };
        }
        if let Some(offset) = self.offset {
            return Stamp {
                at: Utc::now().with_timezone(&offset),
                source: StampSource::FixedOffset,
            };
        }
        Stamp {
            at: Local::now().fixed_offset(),
            source: StampSource::LocalClock,
        }
    }
}

impl Default for LogClock {
    /// Central Mexico, where the herd lives.
    fn default() -> Self {
        Self::new("America/Mexico_City", -6)
    }
}
