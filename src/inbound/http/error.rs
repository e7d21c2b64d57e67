//! HTTP adapter mapping for domain failures.
//!
//! The single point where failures become client visible: every [`Error`]
//! turns into exactly one JSON envelope plus a status code here. Nothing is
//! retried — by the time normalization runs the failure has already
//! terminated request processing.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::warn;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(error: &Error) -> StatusCode {
    // Service errors carry their own class; a carried class outside the
    // valid range degrades to 400 rather than panicking mid-response.
    StatusCode::from_u16(error.status_class()).unwrap_or(StatusCode::BAD_REQUEST)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let body = self.body();
        warn!(
            code = body.code(),
            status = self.status_code().as_u16(),
            "request failed"
        );
        HttpResponse::build(self.status_code()).json(body)
    }
}
