use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AnimalStatus, Sex};

/// A bovine in the herd, keyed by its arete (ear tag).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    /// Unique ear-tag identifier; the natural key for the animal.
    pub ear_tag: String,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Option<i64>,
    pub pen_id: Option<i64>,
    pub status: AnimalStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering an animal. Status starts out `active` and
/// `created_at` is filled in by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
    pub ear_tag: String,
    pub sex: Sex,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Option<i64>,
    pub pen_id: Option<i64>,
}

impl NewAnimal {
    #[must_use]
    pub fn new(ear_tag: impl Into<String>, sex: Sex) -> Self {
        Self {
            ear_tag: ear_tag.into(),
            sex,
            name: None,
            breed: None,
            birth_date: None,
            owner_id: None,
            pen_id: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub const fn with_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub const fn with_pen(mut self, pen_id: i64) -> Self {
        self.pen_id = Some(pen_id);
        self
    }
}
