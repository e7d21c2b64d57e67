//! Driven port minting short-lived access tokens.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Member};

/// Token-issuing collaborator consulted at login completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Mint a fresh access token for the member.
    ///
    /// Called at most once per login completion, with no retry; a failure
    /// aborts the flow.
    async fn issue_access_token(&self, member: &Member) -> Result<String, Error>;
}

/// Issuer handing out random opaque tokens until a real signer is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTokenIssuer;

#[async_trait]
impl TokenIssuer for FixtureTokenIssuer {
    async fn issue_access_token(&self, _member: &Member) -> Result<String, Error> {
        Ok(Uuid::new_v4().simple().to_string())
    }
}
