//! Domain types and decision logic.
//!
//! Everything here is transport agnostic: the failure taxonomy, the envelope
//! each failure produces, and the login completion use case. Inbound adapters
//! map these onto HTTP responses.
//!
//! Public surface:
//! - [`Error`] / [`ErrorBody`] — closed failure set and client envelope.
//! - [`ServiceError`] — business error carrying its own envelope.
//! - [`ConstraintViolation`] / [`FieldError`] — validation report material.
//! - [`Member`] / [`AuthenticatedIdentity`] — account and provider identity.
//! - [`login::complete_login`] — the login completion use case.

pub mod error;
pub mod login;
pub mod member;
pub mod ports;
pub mod redirect;
pub mod violation;

pub use self::error::{Error, ErrorBody, ServiceError};
pub use self::member::{AuthenticatedIdentity, Member};
pub use self::violation::{ConstraintViolation, FieldError};
