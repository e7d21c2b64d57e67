//! Request failure taxonomy and the client-facing error envelope.
//!
//! These types are transport agnostic. The inbound HTTP adapter maps
//! [`Error`] onto status codes and JSON responses; the domain only decides
//! which envelope each failure kind produces.
//!
//! The failure set is closed: every kind the request-handling layer can raise
//! is a variant here and is matched exhaustively when the envelope is built,
//! so no kind can fall through unhandled. Failures outside this set belong to
//! the surrounding framework, not to this crate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::violation::{ConstraintViolation, FieldError, join_sorted};

/// Fixed client text for entity lookups that found nothing.
pub const NOT_FOUND_MESSAGE: &str = "해당 데이터가 존재하지 않습니다.";

/// Fixed client text for request bodies that could not be deserialized.
pub const UNREADABLE_BODY_MESSAGE: &str = "요청 본문이 올바르지 않습니다.";

/// Client-facing error envelope.
///
/// `code` is a dot-free compound token such as `404-1`; `message` is human
/// readable and may span multiple lines when aggregating violations.
///
/// # Examples
/// ```
/// use member_gateway::domain::ErrorBody;
///
/// let body = ErrorBody::new("400-1", "name-NotBlank-must not be blank");
/// assert_eq!(body.code(), "400-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "404-1")]
    code: String,
    #[schema(example = "해당 데이터가 존재하지 않습니다.")]
    message: String,
}

impl ErrorBody {
    /// Construct an envelope from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Compound error code, `<httpClass>-<sequence>`.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Explicit application-raised business error carrying its own envelope.
///
/// The status class is derived from the leading dash-separated segment of the
/// code, so `403-2` surfaces as HTTP 403. Codes without a numeric prefix fall
/// back to 400.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ServiceError {
    code: String,
    message: String,
}

impl ServiceError {
    /// Raise a business error with a prebuilt code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Carried error code, passed through to clients unmodified.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Carried message, passed through to clients unmodified.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// HTTP status class encoded in the code's leading segment.
    pub fn status_class(&self) -> u16 {
        self.code
            .split('-')
            .next()
            .and_then(|class| class.parse().ok())
            .unwrap_or(400)
    }
}

/// Closed set of failures the request-handling layer can raise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Lookup of an entity found nothing.
    #[error("requested entity does not exist")]
    NotFound,
    /// Path or query parameter validation failed.
    #[error("parameter validation failed")]
    ParameterViolations { violations: Vec<ConstraintViolation> },
    /// A bound request body failed declarative validation.
    #[error("request body validation failed")]
    BodyValidation { errors: Vec<FieldError> },
    /// The request body could not be deserialized at all.
    #[error("request body could not be read")]
    UnreadableBody,
    /// A required request header was absent.
    #[error("required header {name} is missing")]
    MissingHeader { name: String, message: String },
    /// Business error with a carried envelope and status.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl Error {
    /// Failure over a set of parameter violations.
    pub fn parameter_violations(violations: impl IntoIterator<Item = ConstraintViolation>) -> Self {
        Self::ParameterViolations {
            violations: violations.into_iter().collect(),
        }
    }

    /// Failure over a set of body field errors.
    pub fn body_validation(errors: impl IntoIterator<Item = FieldError>) -> Self {
        Self::BodyValidation {
            errors: errors.into_iter().collect(),
        }
    }

    /// Failure for a required header that was absent.
    pub fn missing_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// HTTP status class the failure maps to.
    pub fn status_class(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::ParameterViolations { .. }
            | Self::BodyValidation { .. }
            | Self::UnreadableBody
            | Self::MissingHeader { .. } => 400,
            Self::Service(service) => service.status_class(),
        }
    }

    /// Build the client envelope for this failure.
    ///
    /// Violation-bearing kinds assemble one `field-rule-detail` line per
    /// violation, sort the lines lexicographically by full text, and join
    /// them with newlines so responses are reproducible across invocations.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::NotFound => ErrorBody::new("404-1", NOT_FOUND_MESSAGE),
            Self::ParameterViolations { violations } => ErrorBody::new(
                "400-1",
                join_sorted(violations.iter().map(ConstraintViolation::line)),
            ),
            Self::BodyValidation { errors } => {
                ErrorBody::new("400-1", join_sorted(errors.iter().map(FieldError::line)))
            }
            Self::UnreadableBody => ErrorBody::new("400-1", UNREADABLE_BODY_MESSAGE),
            Self::MissingHeader { name, message } => {
                ErrorBody::new("400-1", format!("{name}-NotBlank-{message}"))
            }
            Self::Service(service) => ErrorBody::new(service.code(), service.message()),
        }
    }
}
