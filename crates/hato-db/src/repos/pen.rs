//! Pen (corral) repository.
//!
//! Occupancy is always the derived count of active animals housed in the
//! pen — there is no stored counter to drift. Capacity is enforced at
//! placement time by [`HerdService::ensure_pen_has_room`].

use hato_core::entities::{NewLogEntry, Pen, PenOccupancy};
use hato_core::tags::{actions, modules};

use crate::error::DatabaseError;
use crate::helpers::{last_insert_id, parse_datetime};
use crate::service::HerdService;

const SELECT_COLS: &str = "id, name, capacity, created_at";

/// Subquery counting the animals currently occupying a pen. Sold and
/// deceased animals release their slot.
const OCCUPANCY_SUBQUERY: &str =
    "(SELECT COUNT(*) FROM animals a WHERE a.pen_id = p.id AND a.status = 'active')";

fn row_to_pen(row: &libsql::Row) -> Result<Pen, DatabaseError> {
    Ok(Pen {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        capacity: row.get::<i64>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl HerdService {
    /// Register a pen with a fixed capacity.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank name or
    /// non-positive capacity, `DatabaseError::Duplicate` for a taken
    /// name.
    pub async fn add_pen(&self, name: &str, capacity: i64) -> Result<Pen, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::Validation(
                "pen name must not be blank".into(),
            ));
        }
        if capacity <= 0 {
            return Err(DatabaseError::Validation(format!(
                "pen capacity must be positive, got {capacity}"
            )));
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO pens (name, capacity) VALUES (?1, ?2)",
                libsql::params![name, capacity],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "pen", name))?;
        let id = last_insert_id(self.db().conn()).await?;
        let pen = self.get_pen(id).await?;

        self.log_action(
            NewLogEntry::new(modules::PENS, actions::INSERT)
                .with_description(format!("Registered pen '{name}' ({capacity} head)")),
        )
        .await;

        Ok(pen)
    }

    /// Remove a pen.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown id and
    /// `DatabaseError::Constraint` while animals still reference the
    /// pen.
    pub async fn remove_pen(&self, id: i64) -> Result<(), DatabaseError> {
        let pen = self.get_pen(id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM pens WHERE id = ?1", [id])
            .await
            .map_err(DatabaseError::from_delete)?;

        self.log_action(
            NewLogEntry::new(modules::PENS, actions::DELETE)
                .with_description(format!("Removed pen '{}'", pen.name)),
        )
        .await;

        Ok(())
    }

    /// Get a pen by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the pen does not exist.
    pub async fn get_pen(&self, id: i64) -> Result<Pen, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM pens WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "pen",
            key: id.to_string(),
        })?;
        row_to_pen(&row)
    }

    /// List pens with their derived occupancy, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_pens(&self, limit: u32) -> Result<Vec<PenOccupancy>, DatabaseError> {
        let sql = format!(
            "SELECT p.id, p.name, p.capacity, p.created_at, {OCCUPANCY_SUBQUERY} AS occupancy
             FROM pens p ORDER BY p.name LIMIT ?1"
        );
        let mut rows = self.db().conn().query(&sql, [i64::from(limit)]).await?;

        let mut pens = Vec::new();
        while let Some(row) = rows.next().await? {
            pens.push(PenOccupancy {
                pen: row_to_pen(&row)?,
                occupancy: row.get::<i64>(4)?,
            });
        }
        Ok(pens)
    }

    /// Derived count of active animals housed in a pen.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn pen_occupancy(&self, id: i64) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM animals WHERE pen_id = ?1 AND status = 'active'",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// Check the pen exists and has a free slot before housing an animal.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown pen and
    /// `DatabaseError::PenFull` when occupancy has reached capacity.
    pub(crate) async fn ensure_pen_has_room(&self, id: i64) -> Result<Pen, DatabaseError> {
        let pen = self.get_pen(id).await?;
        let occupancy = self.pen_occupancy(id).await?;
        if occupancy >= pen.capacity {
            return Err(DatabaseError::PenFull {
                pen: pen.name,
                capacity: pen.capacity,
            });
        }
        Ok(pen)
    }
}
