//! Animal repository.
//!
//! Animals are keyed by their arete (ear tag), the natural key of the
//! herd. Registration checks the owner exists and the target pen has a
//! free slot before inserting; status changes follow the
//! `active → sold | deceased` transition rules.

use hato_core::entities::{Animal, NewAnimal, NewLogEntry};
use hato_core::enums::AnimalStatus;
use hato_core::tags::{actions, modules};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_date, parse_tagged};
use crate::service::HerdService;

const SELECT_COLS: &str =
    "ear_tag, name, breed, sex, birth_date, owner_id, pen_id, status, created_at";

fn row_to_animal(row: &libsql::Row) -> Result<Animal, DatabaseError> {
    Ok(Animal {
        ear_tag: row.get::<String>(0)?,
        name: get_opt_string(row, 1)?,
        breed: get_opt_string(row, 2)?,
        sex: parse_tagged(&row.get::<String>(3)?)?,
        birth_date: parse_optional_date(get_opt_string(row, 4)?.as_deref())?,
        owner_id: row.get::<Option<i64>>(5)?,
        pen_id: row.get::<Option<i64>>(6)?,
        status: parse_tagged(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl HerdService {
    /// Register an animal under a fresh arete.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank arete,
    /// `DatabaseError::Duplicate` when the arete is taken,
    /// `DatabaseError::NotFound` for an unknown owner or pen, and
    /// `DatabaseError::PenFull` when the target pen has no free slot.
    pub async fn register_animal(&self, new: NewAnimal) -> Result<Animal, DatabaseError> {
        let ear_tag = new.ear_tag.trim();
        if ear_tag.is_empty() {
            return Err(DatabaseError::Validation(
                "animal ear tag must not be blank".into(),
            ));
        }

        if let Some(owner_id) = new.owner_id {
            self.get_owner(owner_id).await?;
        }
        if let Some(pen_id) = new.pen_id {
            self.ensure_pen_has_room(pen_id).await?;
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO animals (ear_tag, name, breed, sex, birth_date, owner_id, pen_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    ear_tag,
                    new.name.as_deref(),
                    new.breed.as_deref(),
                    new.sex.as_str(),
                    new.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
                    new.owner_id,
                    new.pen_id
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "animal", ear_tag))?;

        let animal = self.get_animal(ear_tag).await?;

        self.log_action(
            NewLogEntry::new(modules::ANIMALS, actions::INSERT)
                .with_description(format!("Registered animal '{ear_tag}'"))
                .with_details(
                    serde_json::json!({
                        "sex": animal.sex,
                        "breed": animal.breed,
                        "owner_id": animal.owner_id,
                        "pen_id": animal.pen_id,
                    })
                    .to_string(),
                )
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(animal)
    }

    /// Move an animal into a pen, or out to pasture with `None`.
    ///
    /// Moving an animal to the pen it already occupies is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown animal or pen
    /// and `DatabaseError::PenFull` when the target pen has no free
    /// slot.
    pub async fn move_animal(
        &self,
        ear_tag: &str,
        pen_id: Option<i64>,
    ) -> Result<Animal, DatabaseError> {
        let current = self.get_animal(ear_tag).await?;
        if current.pen_id == pen_id {
            return Ok(current);
        }

        let destination = match pen_id {
            Some(id) => {
                let pen = self.ensure_pen_has_room(id).await?;
                format!("pen '{}'", pen.name)
            }
            None => String::from("pasture"),
        };

        self.db()
            .conn()
            .execute(
                "UPDATE animals SET pen_id = ?1 WHERE ear_tag = ?2",
                libsql::params![pen_id, ear_tag],
            )
            .await?;

        let updated = self.get_animal(ear_tag).await?;

        self.log_action(
            NewLogEntry::new(modules::ANIMALS, actions::UPDATE)
                .with_description(format!("Moved animal '{ear_tag}' to {destination}"))
                .with_details(
                    serde_json::json!({ "from_pen": current.pen_id, "to_pen": pen_id })
                        .to_string(),
                )
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(updated)
    }

    /// Transition an animal's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown animal and
    /// `DatabaseError::InvalidState` for a disallowed transition.
    pub async fn update_animal_status(
        &self,
        ear_tag: &str,
        status: AnimalStatus,
    ) -> Result<Animal, DatabaseError> {
        let current = self.get_animal(ear_tag).await?;

        if !current.status.can_transition_to(status) {
            return Err(DatabaseError::InvalidState(format!(
                "cannot transition animal '{ear_tag}' from {} to {status}",
                current.status
            )));
        }

        self.db()
            .conn()
            .execute(
                "UPDATE animals SET status = ?1 WHERE ear_tag = ?2",
                libsql::params![status.as_str(), ear_tag],
            )
            .await?;

        let updated = self.get_animal(ear_tag).await?;

        self.log_action(
            NewLogEntry::new(modules::ANIMALS, actions::UPDATE)
                .with_description(format!("Animal '{ear_tag}' marked {status}"))
                .with_details(
                    serde_json::json!({ "from": current.status, "to": status }).to_string(),
                )
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(updated)
    }

    /// Remove an animal record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown arete and
    /// `DatabaseError::Constraint` while calves still reference the
    /// animal as their dam.
    pub async fn remove_animal(&self, ear_tag: &str) -> Result<(), DatabaseError> {
        self.get_animal(ear_tag).await?;

        self.db()
            .conn()
            .execute("DELETE FROM animals WHERE ear_tag = ?1", [ear_tag])
            .await
            .map_err(DatabaseError::from_delete)?;

        self.log_action(
            NewLogEntry::new(modules::ANIMALS, actions::DELETE)
                .with_description(format!("Removed animal '{ear_tag}'"))
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(())
    }

    /// Get an animal by arete.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the animal does not exist.
    pub async fn get_animal(&self, ear_tag: &str) -> Result<Animal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM animals WHERE ear_tag = ?1"),
                [ear_tag],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "animal",
            key: ear_tag.to_string(),
        })?;
        row_to_animal(&row)
    }

    /// List animals, optionally filtered by status, ordered by arete.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_animals(
        &self,
        status: Option<AnimalStatus>,
        limit: u32,
    ) -> Result<Vec<Animal>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM animals
                             WHERE status = ?1 ORDER BY ear_tag LIMIT ?2"
                        ),
                        libsql::params![status.as_str(), i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLS} FROM animals ORDER BY ear_tag LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut animals = Vec::new();
        while let Some(row) = rows.next().await? {
            animals.push(row_to_animal(&row)?);
        }
        Ok(animals)
    }
}
