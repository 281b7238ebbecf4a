use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Sex;

/// A calf (becerro), tracked from breeding through birth.
///
/// `expected_birth_date` is computed from the dam's breeding date via
/// [`crate::gestation::expected_calving`]; `birth_date` stays empty until
/// the birth is recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calf {
    pub ear_tag: String,
    /// Arete of the dam (mother) in the animals table.
    pub dam_tag: String,
    pub sex: Option<Sex>,
    pub breeding_date: NaiveDate,
    pub expected_birth_date: NaiveDate,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a calf. The expected birth date is derived
/// from `breeding_date` by the store; sex is usually unknown until
/// birth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalf {
    pub ear_tag: String,
    pub dam_tag: String,
    pub breeding_date: NaiveDate,
    pub sex: Option<Sex>,
}

impl NewCalf {
    #[must_use]
    pub fn new(
        ear_tag: impl Into<String>,
        dam_tag: impl Into<String>,
        breeding_date: NaiveDate,
    ) -> Self {
        Self {
            ear_tag: ear_tag.into(),
            dam_tag: dam_tag.into(),
            breeding_date,
            sex: None,
        }
    }

    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}
