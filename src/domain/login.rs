//! Login completion use case.
//!
//! Runs once per successful federated-login handshake: resolves the local
//! member, mints session credentials, and computes the client redirect. The
//! OAuth2 handshake itself has already happened by the time this runs; the
//! identity arrives as an explicit parameter.

use crate::domain::ports::{MemberLookup, TokenIssuer};
use crate::domain::redirect::redirect_target;
use crate::domain::{AuthenticatedIdentity, Error};

/// Session credentials and redirect computed at login completion.
///
/// `api_key` and `access_token` become cookies of the same names; neither is
/// persisted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCompletion {
    /// Long-lived account identifier, read from the member record.
    pub api_key: String,
    /// Freshly minted short-lived session credential.
    pub access_token: String,
    /// Path the client is redirected to.
    pub redirect_to: String,
}

/// Finalize a federated login.
///
/// Resolution and issuance failures propagate to the error normalizer; only
/// redirect-state decoding recovers locally (to `/`), because a broken
/// redirect hint must not block a successful login.
pub async fn complete_login(
    identity: &AuthenticatedIdentity,
    state: Option<&str>,
    members: &dyn MemberLookup,
    tokens: &dyn TokenIssuer,
) -> Result<LoginCompletion, Error> {
    let member = members.resolve(identity).await?;
    let access_token = tokens.issue_access_token(&member).await?;
    Ok(LoginCompletion {
        api_key: member.api_key().to_owned(),
        access_token,
        redirect_to: redirect_target(state),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Member;
    use crate::domain::ports::{MockMemberLookup, MockTokenIssuer};
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use rstest::rstest;

    fn member_k1() -> Member {
        Member::new(1, "alice", "k1")
    }

    fn lookup_returning(member: Member) -> MockMemberLookup {
        let mut lookup = MockMemberLookup::new();
        lookup
            .expect_resolve()
            .times(1)
            .returning(move |_| Ok(member.clone()));
        lookup
    }

    fn issuer_returning(token: &str) -> MockTokenIssuer {
        let token = token.to_owned();
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_issue_access_token()
            .times(1)
            .returning(move |_| Ok(token.clone()));
        issuer
    }

    #[rstest]
    #[tokio::test]
    async fn completion_without_state_redirects_to_root() {
        let lookup = lookup_returning(member_k1());
        let issuer = issuer_returning("t1");
        let identity = AuthenticatedIdentity::new("alice");

        let completion = complete_login(&identity, None, &lookup, &issuer)
            .await
            .expect("completion");
        assert_eq!(completion.api_key, "k1");
        assert_eq!(completion.access_token, "t1");
        assert_eq!(completion.redirect_to, "/");
    }

    #[rstest]
    #[tokio::test]
    async fn completion_follows_the_decoded_state_path() {
        let lookup = lookup_returning(member_k1());
        let issuer = issuer_returning("t1");
        let identity = AuthenticatedIdentity::new("alice");
        let state = URL_SAFE_NO_PAD.encode("/dash#extra=1");

        let completion = complete_login(&identity, Some(&state), &lookup, &issuer)
            .await
            .expect("completion");
        assert_eq!(completion.redirect_to, "/dash");
    }

    #[rstest]
    #[tokio::test]
    async fn unresolved_member_aborts_the_flow() {
        let mut lookup = MockMemberLookup::new();
        lookup.expect_resolve().times(1).returning(|_| Err(Error::NotFound));
        // The token issuer must not be consulted when resolution fails.
        let mut issuer = MockTokenIssuer::new();
        issuer.expect_issue_access_token().never();
        let identity = AuthenticatedIdentity::new("mallory");

        let error = complete_login(&identity, None, &lookup, &issuer)
            .await
            .expect_err("resolution failure");
        assert_eq!(error, Error::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn issuance_failure_propagates() {
        let lookup = lookup_returning(member_k1());
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_issue_access_token()
            .times(1)
            .returning(|_| Err(Error::from(crate::domain::ServiceError::new("500-1", "token backend down"))));
        let identity = AuthenticatedIdentity::new("alice");

        let error = complete_login(&identity, None, &lookup, &issuer)
            .await
            .expect_err("issuance failure");
        assert_eq!(error.status_class(), 500);
    }
}
