//! Member identity types.
//!
//! [`Member`] is the local account record resolved at login completion. The
//! long-lived `api_key` is read here, never minted; fresh access tokens come
//! from the [`crate::domain::ports::TokenIssuer`] port.

/// Local account record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: i64,
    username: String,
    api_key: String,
}

impl Member {
    /// Construct a member record.
    pub fn new(id: i64, username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Stable numeric identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Login name, unique per member.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Long-lived API key identifying the account.
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }
}

/// Identity produced by the external identity-provider integration.
///
/// Passed explicitly into the login completion flow; this crate never reaches
/// into ambient request-scoped context for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    username: String,
}

impl AuthenticatedIdentity {
    /// Wrap the username asserted by the identity provider.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Asserted login name used to resolve the local member record.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}
