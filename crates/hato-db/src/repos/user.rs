//! User repository.
//!
//! Users exist to back the session identity recorded in the logbook.
//! There are no credentials here; `login` only verifies the login
//! exists and is active, then records the event.

use hato_core::entities::{NewLogEntry, User};
use hato_core::session::Session;
use hato_core::tags::{actions, modules};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, last_insert_id, parse_datetime};
use crate::service::HerdService;

const SELECT_COLS: &str = "id, login, display_name, role, active, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        login: row.get::<String>(1)?,
        display_name: get_opt_string(row, 2)?,
        role: get_opt_string(row, 3)?,
        active: row.get::<i64>(4)? != 0,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl HerdService {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank login and
    /// `DatabaseError::Duplicate` when the login is taken.
    pub async fn add_user(
        &self,
        login: &str,
        display_name: Option<&str>,
        role: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(DatabaseError::Validation(
                "user login must not be blank".into(),
            ));
        }

        self.db()
            .conn()
            .execute(
                "INSERT INTO users (login, display_name, role) VALUES (?1, ?2, ?3)",
                libsql::params![login, display_name, role],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, "user", login))?;
        let id = last_insert_id(self.db().conn()).await?;
        let user = self.get_user(id).await?;

        self.log_action(
            NewLogEntry::new(modules::USERS, actions::INSERT)
                .with_description(format!("Registered user '{login}'")),
        )
        .await;

        Ok(user)
    }

    /// Deactivate a user so it can no longer log in.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown login and
    /// `DatabaseError::InvalidState` when already deactivated.
    pub async fn deactivate_user(&self, login: &str) -> Result<User, DatabaseError> {
        let current = self.get_user_by_login(login).await?;
        if !current.active {
            return Err(DatabaseError::InvalidState(format!(
                "user '{login}' is already deactivated"
            )));
        }

        self.db()
            .conn()
            .execute("UPDATE users SET active = 0 WHERE login = ?1", [login])
            .await?;

        let updated = self.get_user_by_login(login).await?;

        self.log_action(
            NewLogEntry::new(modules::USERS, actions::UPDATE)
                .with_description(format!("Deactivated user '{login}'")),
        )
        .await;

        Ok(updated)
    }

    /// Verify a login and record the event.
    ///
    /// Returns the session identity the rest of the run should be
    /// attributed to. The logbook entry is attributed to the user who
    /// logged in, not the service session.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown login and
    /// `DatabaseError::InvalidState` for a deactivated user.
    pub async fn login(&self, login: &str) -> Result<Session, DatabaseError> {
        let user = self.get_user_by_login(login).await?;
        if !user.active {
            return Err(DatabaseError::InvalidState(format!(
                "user '{login}' is deactivated"
            )));
        }

        let session = user.session();
        self.record_action(
            NewLogEntry::new(modules::USERS, actions::LOGIN)
                .with_description(format!("User '{login}' logged in")),
            &session,
        )
        .await;

        Ok(session)
    }

    /// Get a user by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "user",
            key: id.to_string(),
        })?;
        row_to_user(&row)
    }

    /// Get a user by login handle.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the user does not exist.
    pub async fn get_user_by_login(&self, login: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE login = ?1"),
                [login],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "user",
            key: login.to_string(),
        })?;
        row_to_user(&row)
    }

    /// List users ordered by login.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY login LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}
