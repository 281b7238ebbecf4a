use std::fmt;

use anyhow::Context;
use tracing::warn;

use hato_config::HatoConfig;
use hato_core::session::Session;
use hato_db::clock::LogClock;
use hato_db::error::DatabaseError;
use hato_db::service::HerdService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HerdService,
    pub config: HatoConfig,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `HerdService` holds libsql handles, which have no `Debug` impl.
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Open the database, resolve the invocation's session identity, and
    /// build the service.
    ///
    /// The session is resolved from `--user` first, then the configured
    /// operator, then anonymous. Resolution looks the login up in the
    /// users table so the logbook gets the full identity; it does not
    /// record a `LOGIN` entry — only `hato user login` does that.
    pub async fn init(flags: &GlobalFlags, config: HatoConfig) -> anyhow::Result<Self> {
        let db_path = flags
            .db
            .clone()
            .unwrap_or_else(|| config.database.path.clone());
        let clock = LogClock::new(&config.time.zone, config.time.fallback_offset_hours);

        let service = HerdService::new_local(&db_path, Session::anonymous())
            .await
            .with_context(|| format!("failed to open herd database at {db_path}"))?
            .with_clock(clock);

        let session = resolve_session(&service, flags, &config).await?;
        Ok(Self {
            service: service.with_session(session),
            config,
        })
    }
}

/// Resolve who this invocation acts as.
///
/// An explicit `--user` must name a known, active login. The configured
/// operator is softer: an unknown operator degrades to a bare login
/// identity with a warning, so a fresh database still attributes actions
/// by name.
async fn resolve_session(
    service: &HerdService,
    flags: &GlobalFlags,
    config: &HatoConfig,
) -> anyhow::Result<Session> {
    if let Some(login) = flags.user.as_deref() {
        return match service.get_user_by_login(login).await {
            Ok(user) if user.active => Ok(user.session()),
            Ok(_) => anyhow::bail!("user '{login}' is deactivated"),
            Err(DatabaseError::NotFound { .. }) => {
                anyhow::bail!("unknown user '{login}' (register it with 'hato user add')")
            }
            Err(error) => Err(error.into()),
        };
    }

    let operator = config.general.operator.trim();
    if operator.is_empty() {
        return Ok(Session::anonymous());
    }

    match service.get_user_by_login(operator).await {
        Ok(user) if user.active => Ok(user.session()),
        Ok(_) => anyhow::bail!("configured operator '{operator}' is deactivated"),
        Err(DatabaseError::NotFound { .. }) => {
            warn!(operator, "configured operator has no user record");
            Ok(Session::for_user(operator, None, None))
        }
        Err(error) => Err(error.into()),
    }
}
