//! Session identity and actor resolution.
//!
//! The current operator is an explicit immutable value passed by reference
//! into the service layer and down to the logbook — never ambient global
//! state. Logbook appends accept an [`ActorContext`] and resolve the actor
//! name through an ordered strategy chain; the winning strategy is
//! reported alongside the name so callers and tests can observe it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Actor name recorded when no identity resolves.
pub const UNKNOWN_ACTOR: &str = "Unknown";

/// Immutable identity of the operator for one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Login handle (e.g. `jdoe`).
    pub login: Option<String>,
    /// Human display name (e.g. `Jane Doe`).
    pub display_name: Option<String>,
    /// Role name (e.g. `Admin`).
    pub role: Option<String>,
}

impl Session {
    /// Identity for a known user record.
    #[must_use]
    pub fn for_user(
        login: impl Into<String>,
        display_name: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            login: Some(login.into()),
            display_name,
            role,
        }
    }

    /// Identity with no fields set; resolves to [`UNKNOWN_ACTOR`].
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve this session to an actor name (see [`ActorContext::resolve`]).
    #[must_use]
    pub fn actor(&self) -> ResolvedActor {
        ActorContext::from(self).resolve()
    }
}

// ---------------------------------------------------------------------------
// ActorContext
// ---------------------------------------------------------------------------

/// What a logbook append knows about who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorContext {
    /// No identity available.
    Anonymous,
    /// Structured identity; resolved through the field chain.
    Session(Session),
    /// A caller-supplied name used verbatim.
    Literal(String),
}

/// Which strategy in the resolution chain produced the actor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorSource {
    Login,
    DisplayName,
    Role,
    Verbatim,
    Unknown,
}

impl ActorSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::DisplayName => "display_name",
            Self::Role => "role",
            Self::Verbatim => "verbatim",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved actor name plus the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedActor {
    pub name: String,
    pub source: ActorSource,
}

impl ActorContext {
    /// Resolve the actor name.
    ///
    /// Strategies are tried in order — login handle, display name, role —
    /// and the first non-blank field wins. Blank and whitespace-only
    /// fields are skipped. When nothing resolves the name is the literal
    /// [`UNKNOWN_ACTOR`]; the result is never empty.
    #[must_use]
    pub fn resolve(&self) -> ResolvedActor {
        match self {
            Self::Anonymous => unknown(),
            Self::Literal(name) => match non_blank(Some(name)) {
                Some(name) => ResolvedActor {
                    name,
                    source: ActorSource::Verbatim,
                },
                None => unknown(),
            },
            Self::Session(session) => {
                let chain = [
                    (session.login.as_deref(), ActorSource::Login),
                    (session.display_name.as_deref(), ActorSource::DisplayName),
                    (session.role.as_deref(), ActorSource::Role),
                ];
                for (field, source) in chain {
                    if let Some(name) = non_blank(field) {
                        return ResolvedActor { name, source };
                    }
                }
                unknown()
            }
        }
    }
}

impl From<&Session> for ActorContext {
    fn from(session: &Session) -> Self {
        Self::Session(session.clone())
    }
}

impl From<Session> for ActorContext {
    fn from(session: Session) -> Self {
        Self::Session(session)
    }
}

impl From<&str> for ActorContext {
    fn from(name: &str) -> Self {
        Self::Literal(name.to_string())
    }
}

fn unknown() -> ResolvedActor {
    ResolvedActor {
        name: UNKNOWN_ACTOR.to_string(),
        source: ActorSource::Unknown,
    }
}

fn non_blank(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn session(login: Option<&str>, display: Option<&str>, role: Option<&str>) -> Session {
        Session {
            login: login.map(str::to_string),
            display_name: display.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    #[rstest]
    #[case(session(Some("jdoe"), Some("Jane Doe"), Some("Admin")), "jdoe", ActorSource::Login)]
    #[case(session(None, Some("Jane Doe"), Some("Admin")), "Jane Doe", ActorSource::DisplayName)]
    #[case(session(None, None, Some("Admin")), "Admin", ActorSource::Role)]
    #[case(session(None, None, None), "Unknown", ActorSource::Unknown)]
    #[case(session(Some("  "), Some(""), Some("Admin")), "Admin", ActorSource::Role)]
    fn session_fields_resolve_in_order(
        #[case] session: Session,
        #[case] expected: &str,
        #[case] source: ActorSource,
    ) {
        let resolved = ActorContext::from(session).resolve();
        assert_eq!(resolved.name, expected);
        assert_eq!(resolved.source, source);
    }

    #[test]
    fn anonymous_resolves_to_unknown() {
        let resolved = ActorContext::Anonymous.resolve();
        assert_eq!(resolved.name, UNKNOWN_ACTOR);
        assert_eq!(resolved.source, ActorSource::Unknown);
    }

    #[test]
    fn literal_is_used_verbatim() {
        let resolved = ActorContext::from("maintenance script").resolve();
        assert_eq!(resolved.name, "maintenance script");
        assert_eq!(resolved.source, ActorSource::Verbatim);
    }

    #[test]
    fn blank_literal_falls_back_to_unknown() {
        let resolved = ActorContext::Literal(String::from("   ")).resolve();
        assert_eq!(resolved.name, UNKNOWN_ACTOR);
    }

    #[test]
    fn resolved_name_is_never_empty() {
        for ctx in [
            ActorContext::Anonymous,
            ActorContext::Literal(String::new()),
            ActorContext::Session(Session::anonymous()),
        ] {
            assert!(!ctx.resolve().name.is_empty());
        }
    }
}
