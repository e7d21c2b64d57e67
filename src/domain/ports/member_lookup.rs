//! Driven port resolving an authenticated identity to a member record.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Error, Member};

/// Account-lookup collaborator consulted at login completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberLookup: Send + Sync {
    /// Resolve the local member record for an authenticated identity.
    ///
    /// A miss is a [`Error::NotFound`] and aborts the whole completion flow.
    async fn resolve(&self, identity: &AuthenticatedIdentity) -> Result<Member, Error>;
}

/// In-memory lookup used until persistence is wired.
///
/// Knows a single member, `alice`, with a stable API key so development
/// flows and integration tests see deterministic credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMemberLookup;

impl FixtureMemberLookup {
    /// Username of the only member the fixture resolves.
    pub const USERNAME: &'static str = "alice";
    /// API key carried by the fixture member record.
    pub const API_KEY: &'static str = "a3f1c9d2-5b7e-4c80-9f21-6d4e8b2a7c53";
}

#[async_trait]
impl MemberLookup for FixtureMemberLookup {
    async fn resolve(&self, identity: &AuthenticatedIdentity) -> Result<Member, Error> {
        if identity.username() == Self::USERNAME {
            Ok(Member::new(1, Self::USERNAME, Self::API_KEY))
        } else {
            Err(Error::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_resolves_the_known_member() {
        let lookup = FixtureMemberLookup;
        let identity = AuthenticatedIdentity::new(FixtureMemberLookup::USERNAME);

        let member = lookup.resolve(&identity).await.expect("member record");
        assert_eq!(member.username(), FixtureMemberLookup::USERNAME);
        assert_eq!(member.api_key(), FixtureMemberLookup::API_KEY);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_misses_map_to_not_found() {
        let lookup = FixtureMemberLookup;
        let identity = AuthenticatedIdentity::new("mallory");

        let error = lookup.resolve(&identity).await.expect_err("lookup miss");
        assert_eq!(error, Error::NotFound);
    }
}
