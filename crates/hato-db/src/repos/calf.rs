//! Calf (becerro) repository.
//!
//! Calves are tracked from breeding: registration derives the expected
//! birth date from the dam's breeding date, and `record_birth` later
//! fills in the actual date, weight and sex.

use chrono::NaiveDate;

use hato_core::entities::{Calf, NewCalf, NewLogEntry};
use hato_core::enums::Sex;
use hato_core::gestation;
use hato_core::tags::{actions, modules};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_optional_date, parse_tagged};
use crate::service::HerdService;

const SELECT_COLS: &str = "ear_tag, dam_tag, sex, breeding_date, expected_birth_date, \
                           birth_date, weight_kg, created_at";

fn row_to_calf(row: &libsql::Row) -> Result<Calf, DatabaseError> {
    Ok(Calf {
        ear_tag: row.get::<String>(0)?,
        dam_tag: row.get::<String>(1)?,
        sex: get_opt_string(row, 2)?
            .as_deref()
            .map(parse_tagged::<Sex>)
            .transpose()?,
        breeding_date: parse_date(&row.get::<String>(3)?)?,
        expected_birth_date: parse_date(&row.get::<String>(4)?)?,
        birth_date: parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        weight_kg: row.get::<Option<f64>>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl HerdService {
    /// Register a calf against its dam's breeding date.
    ///
    /// The expected birth date is the breeding date plus the bovine
    /// gestation period ([`gestation::GESTATION_DAYS`]).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank arete or a dam
    /// that is not a cow, `DatabaseError::NotFound` for an unknown dam,
    /// and `DatabaseError::Duplicate` when the arete is taken.
    pub async fn register_calf(&self, new: NewCalf) -> Result<Calf, DatabaseError> {
        let ear_tag = new.ear_tag.trim();
        if ear_tag.is_empty() {
            return Err(DatabaseError::Validation(
                "calf ear tag must not be blank".into(),
            ));
        }

        let dam = self.get_animal(&new.dam_tag).await?;
        if dam.sex != Sex::Female {
            return Err(DatabaseError::Validation(format!(
                "dam '{}' is not a cow",
                dam.ear_tag
            )));
        }

        let expected = gestation::expected_calving(new.breeding_date).ok_or_else(|| {
            DatabaseError::Validation(format!(
                "breeding date {} is out of calendar range",
                new.breeding_date
            ))
        })?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO calves (ear_tag, dam_tag, sex, breeding_date, expected_birth_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    ear_tag,
                    dam.ear_tag.as_str(),
                    new.sex.map(Sex::as_str),
                    new.breeding_date.format("%Y-%m-%d").to_string(),
                    expected.format("%Y-%m-%d").to_string()
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "calf", ear_tag))?;

        let calf = self.get_calf(ear_tag).await?;

        self.log_action(
            NewLogEntry::new(modules::CALVES, actions::INSERT)
                .with_description(format!("Registered calf '{ear_tag}' (dam '{}')", dam.ear_tag))
                .with_details(
                    serde_json::json!({
                        "dam": dam.ear_tag,
                        "breeding_date": calf.breeding_date,
                        "expected_birth_date": calf.expected_birth_date,
                    })
                    .to_string(),
                )
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(calf)
    }

    /// Record the actual birth of a calf.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown calf and
    /// `DatabaseError::InvalidState` when the birth is already
    /// recorded.
    pub async fn record_birth(
        &self,
        ear_tag: &str,
        birth_date: NaiveDate,
        weight_kg: Option<f64>,
        sex: Option<Sex>,
    ) -> Result<Calf, DatabaseError> {
        let current = self.get_calf(ear_tag).await?;
        if let Some(recorded) = current.birth_date {
            return Err(DatabaseError::InvalidState(format!(
                "calf '{ear_tag}' birth already recorded on {recorded}"
            )));
        }

        self.db()
            .conn()
            .execute(
                "UPDATE calves SET birth_date = ?1,
                        weight_kg = COALESCE(?2, weight_kg),
                        sex = COALESCE(?3, sex)
                 WHERE ear_tag = ?4",
                libsql::params![
                    birth_date.format("%Y-%m-%d").to_string(),
                    weight_kg,
                    sex.map(Sex::as_str),
                    ear_tag
                ],
            )
            .await?;

        let updated = self.get_calf(ear_tag).await?;

        self.log_action(
            NewLogEntry::new(modules::CALVES, actions::UPDATE)
                .with_description(format!("Recorded birth of calf '{ear_tag}' on {birth_date}"))
                .with_details(
                    serde_json::json!({
                        "birth_date": birth_date,
                        "weight_kg": updated.weight_kg,
                        "sex": updated.sex,
                    })
                    .to_string(),
                )
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(updated)
    }

    /// Remove a calf record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown arete.
    pub async fn remove_calf(&self, ear_tag: &str) -> Result<(), DatabaseError> {
        self.get_calf(ear_tag).await?;

        self.db()
            .conn()
            .execute("DELETE FROM calves WHERE ear_tag = ?1", [ear_tag])
            .await
            .map_err(DatabaseError::from_delete)?;

        self.log_action(
            NewLogEntry::new(modules::CALVES, actions::DELETE)
                .with_description(format!("Removed calf '{ear_tag}'"))
                .with_ear_tag(ear_tag),
        )
        .await;

        Ok(())
    }

    /// Get a calf by arete.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the calf does not exist.
    pub async fn get_calf(&self, ear_tag: &str) -> Result<Calf, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM calves WHERE ear_tag = ?1"),
                [ear_tag],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "calf",
            key: ear_tag.to_string(),
        })?;
        row_to_calf(&row)
    }

    /// List calves, optionally restricted to one dam, ordered by arete.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_calves(
        &self,
        dam_tag: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Calf>, DatabaseError> {
        let mut rows = match dam_tag {
            Some(dam) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM calves
                             WHERE dam_tag = ?1 ORDER BY ear_tag LIMIT ?2"
                        ),
                        libsql::params![dam, i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLS} FROM calves ORDER BY ear_tag LIMIT ?1"),
                        [i64::from(limit)],
                    )
                    .await?
            }
        };

        let mut calves = Vec::new();
        while let Some(row) = rows.next().await? {
            calves.push(row_to_calf(&row)?);
        }
        Ok(calves)
    }
}
