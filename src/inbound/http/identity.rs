//! Extraction of the authenticated identity from request extensions.
//!
//! The external identity-provider integration terminates the OAuth2
//! handshake and stores the asserted identity in the request's extensions
//! before the completion handler runs. Extracting it here keeps handlers
//! taking the identity as an explicit parameter instead of reading ambient
//! context.

use actix_web::error::ErrorInternalServerError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::AuthenticatedIdentity;

impl FromRequest for AuthenticatedIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // A request reaching a protected handler without an identity is a
        // wiring defect of the surrounding framework, outside the normalized
        // envelope set.
        ready(
            req.extensions()
                .get::<AuthenticatedIdentity>()
                .cloned()
                .ok_or_else(|| {
                    ErrorInternalServerError("authenticated identity missing from request")
                }),
        )
    }
}
