//! Owner (propietario) repository — CRUD over the people animals belong to.

use hato_core::entities::{NewLogEntry, Owner};
use hato_core::tags::{actions, modules};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, last_insert_id, parse_datetime};
use crate::service::HerdService;

const SELECT_COLS: &str = "id, name, phone, created_at";

fn row_to_owner(row: &libsql::Row) -> Result<Owner, DatabaseError> {
    Ok(Owner {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        phone: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HerdService {
    /// Register an owner.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank name and
    /// `DatabaseError::Duplicate` when the name is taken.
    pub async fn add_owner(&self, name: &str, phone: Option<&str>) -> Result<Owner, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::Validation(
                "owner name must not be blank".into(),
            ));
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO owners (name, phone) VALUES (?1, ?2)",
                libsql::params![name, phone],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "owner", name))?;
        let id = last_insert_id(self.db().conn()).await?;
        let owner = self.get_owner(id).await?;

        self.log_action(
            NewLogEntry::new(modules::OWNERS, actions::INSERT)
                .with_description(format!("Registered owner '{name}'")),
        )
        .await;

        Ok(owner)
    }

    /// Update an owner's name and/or phone. `None` leaves the field as is.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown id and
    /// `DatabaseError::Duplicate` when the new name is taken.
    pub async fn update_owner(
        &self,
        id: i64,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Owner, DatabaseError> {
        let current = self.get_owner(id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut changed = serde_json::Map::new();

        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DatabaseError::Validation(
                    "owner name must not be blank".into(),
                ));
            }
            params.push(name.into());
            sets.push(format!("name = ?{}", params.len()));
            changed.insert("name".into(), name.into());
        }
        if let Some(phone) = phone {
            params.push(phone.into());
            sets.push(format!("phone = ?{}", params.len()));
            changed.insert("phone".into(), phone.into());
        }

        if sets.is_empty() {
            return Ok(current);
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE owners SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| DatabaseError::from_write(e, "owner", name.unwrap_or(&current.name)))?;

        let updated = self.get_owner(id).await?;

        self.log_action(
            NewLogEntry::new(modules::OWNERS, actions::UPDATE)
                .with_description(format!("Updated owner '{}'", updated.name))
                .with_details(serde_json::Value::Object(changed).to_string()),
        )
        .await;

        Ok(updated)
    }

    /// Remove an owner.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown id and
    /// `DatabaseError::Constraint` while animals still reference the
    /// owner.
    pub async fn remove_owner(&self, id: i64) -> Result<(), DatabaseError> {
        let owner = self.get_owner(id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM owners WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from_delete)?;

        self.log_action(
            NewLogEntry::new(modules::OWNERS, actions::DELETE)
                .with_description(format!("Removed owner '{}'", owner.name)),
        )
        .await;

        Ok(())
    }

    /// Get an owner by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the owner does not exist.
    pub async fn get_owner(&self, id: i64) -> Result<Owner, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM owners WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "owner",
            key: id.to_string(),
        })?;
        row_to_owner(&row)
    }

    /// List owners ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_owners(&self, limit: u32) -> Result<Vec<Owner>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM owners ORDER BY name LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut owners = Vec::new();
        while let Some(row) = rows.next().await? {
            owners.push(row_to_owner(&row)?);
        }
        Ok(owners)
    }
}
