//! Login completion endpoint.
//!
//! ```text
//! GET /api/v1/auth/success?state=<base64url>
//! ```
//!
//! Terminal step of the federated login flow: by the time this handler runs
//! the identity provider has authenticated the user and the integration
//! layer has provisioned an [`AuthenticatedIdentity`] on the request. The
//! handler mints session credentials as cookies and redirects the client.

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::domain::{AuthenticatedIdentity, login};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Cookie carrying the long-lived account API key.
pub const API_KEY_COOKIE: &str = "apiKey";

/// Cookie carrying the freshly minted access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Query parameters echoed back by the identity provider.
///
/// Only `state` matters here; protocol parameters such as `code` have been
/// consumed upstream and are ignored.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CompletionQuery {
    /// Opaque base64url token preserving the intended post-login path.
    state: Option<String>,
}

/// Finalize a federated login: set credential cookies and redirect.
///
/// Cookie attributes beyond name and value are a deployment concern applied
/// by the fronting configuration, not here.
#[utoipa::path(
    get,
    path = "/api/v1/auth/success",
    params(CompletionQuery),
    responses(
        (
            status = 302,
            description = "Login finalized; credentials issued as cookies",
            headers(
                ("Set-Cookie" = String, description = "apiKey and accessToken cookies"),
                ("Location" = String, description = "Post-login destination path")
            )
        ),
        (status = 404, description = "No member for the authenticated identity", body = crate::domain::ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "completeLogin",
    security([])
)]
#[get("/auth/success")]
pub async fn complete_login(
    state: web::Data<HttpState>,
    identity: AuthenticatedIdentity,
    query: web::Query<CompletionQuery>,
) -> ApiResult<HttpResponse> {
    let completion = login::complete_login(
        &identity,
        query.state.as_deref(),
        state.members.as_ref(),
        state.tokens.as_ref(),
    )
    .await?;

    Ok(HttpResponse::Found()
        .cookie(Cookie::new(API_KEY_COOKIE, completion.api_key))
        .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, completion.access_token))
        .insert_header((header::LOCATION, completion.redirect_to))
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockMemberLookup, MockTokenIssuer};
    use crate::domain::{Error, Member};
    use crate::middleware::ProvisionIdentity;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::Value;
    use std::sync::Arc;

    fn state_with(lookup: MockMemberLookup, issuer: MockTokenIssuer) -> HttpState {
        HttpState::new(Arc::new(lookup), Arc::new(issuer))
    }

    fn resolving_state(api_key: &str, token: &str) -> HttpState {
        let member = Member::new(1, "alice", api_key);
        let mut lookup = MockMemberLookup::new();
        lookup
            .expect_resolve()
            .returning(move |_| Ok(member.clone()));
        let token = token.to_owned();
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_issue_access_token()
            .returning(move |_| Ok(token.clone()));
        state_with(lookup, issuer)
    }

    fn test_app(
        state: HttpState,
        identity: AuthenticatedIdentity,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
                actix_web::dev::ServiceRequest,
                Config = (),
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
                InitError = (),
            >,
    > {
        App::new()
            .wrap(ProvisionIdentity::new(identity))
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").service(complete_login))
    }

    fn cookie_value(response: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_owned())
    }

    #[actix_web::test]
    async fn completion_sets_both_cookies_and_redirects_to_root() {
        let app = test::init_service(test_app(
            resolving_state("k1", "t1"),
            AuthenticatedIdentity::new("alice"),
        ))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/auth/success")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(cookie_value(&res, API_KEY_COOKIE).as_deref(), Some("k1"));
        assert_eq!(
            cookie_value(&res, ACCESS_TOKEN_COOKIE).as_deref(),
            Some("t1")
        );
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some("/"));
    }

    #[actix_web::test]
    async fn completion_follows_the_state_path_and_drops_the_hash_hint() {
        let app = test::init_service(test_app(
            resolving_state("k1", "t1"),
            AuthenticatedIdentity::new("alice"),
        ))
        .await;

        let state = URL_SAFE_NO_PAD.encode("/dash#extra=1");
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/auth/success?state={state}"))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some("/dash"));
    }

    #[actix_web::test]
    async fn malformed_state_still_completes_and_falls_back_to_root() {
        let app = test::init_service(test_app(
            resolving_state("k1", "t1"),
            AuthenticatedIdentity::new("alice"),
        ))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/auth/success?state=!!!not-base64!!!")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FOUND);
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some("/"));
    }

    #[actix_web::test]
    async fn unresolved_identity_surfaces_the_not_found_envelope() {
        let mut lookup = MockMemberLookup::new();
        lookup.expect_resolve().returning(|_| Err(Error::NotFound));
        let mut issuer = MockTokenIssuer::new();
        issuer.expect_issue_access_token().never();

        let app = test::init_service(test_app(
            state_with(lookup, issuer),
            AuthenticatedIdentity::new("mallory"),
        ))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/auth/success")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(res).await;
        let value: Value = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(value.get("code").and_then(Value::as_str), Some("404-1"));
    }
}
