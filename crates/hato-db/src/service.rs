//! Service layer binding the database to an operator identity.
//!
//! `HerdService` wraps `HatoDb` (raw database access), the immutable
//! [`Session`] of the current operator, and the [`LogClock`] that stamps
//! logbook rows. All repo methods are implemented as `impl HerdService`
//! blocks in [`crate::repos`].
//!
//! Every mutation method follows this protocol:
//! 1. Validate inputs
//! 2. Execute SQL
//! 3. Append a bitácora entry attributed to the session

use hato_core::session::Session;

use crate::HatoDb;
use crate::clock::LogClock;
use crate::error::DatabaseError;

/// Orchestrates herd mutations with logbook appends.
pub struct HerdService {
    db: HatoDb,
    session: Session,
    clock: LogClock,
}

impl HerdService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"`
    ///   for tests.
    /// * `session` — Identity every mutation is attributed to. Use
    ///   [`Session::anonymous`] when no operator is known.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn new_local(db_path: &str, session: Session) -> Result<Self, DatabaseError> {
        let db = HatoDb::open_local(db_path).await?;
        Ok(Self::from_db(db, session))
    }

    /// Create from an existing `HatoDb` (for testing).
    #[must_use]
    pub fn from_db(db: HatoDb, session: Session) -> Self {
        Self {
            db,
            session,
            clock: LogClock::default(),
        }
    }

    /// Replace the logbook clock (configured zone and fallback offset).
    #[must_use]
    pub fn with_clock(mut self, clock: LogClock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the operator identity, e.g. after `--user` resolution.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HatoDb {
        &self.db
    }

    /// The operator identity mutations are attributed to.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The clock stamping logbook rows.
    #[must_use]
    pub const fn clock(&self) -> &LogClock {
        &self.clock
    }
}
