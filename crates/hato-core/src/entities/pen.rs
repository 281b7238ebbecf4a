use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A corral. Occupancy is derived from the animals housed in it, never
/// stored, so it cannot drift from reality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pen {
    pub id: i64,
    pub name: String,
    /// Maximum number of animals the pen holds.
    pub capacity: i64,
    pub created_at: DateTime<Utc>,
}

/// A pen together with its current derived occupancy count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PenOccupancy {
    #[serde(flatten)]
    pub pen: Pen,
    pub occupancy: i64,
}
