//! Request middleware.
//!
//! Request lifecycle concerns: trace correlation and identity provisioning.

pub mod identity;
pub mod trace;

pub use identity::ProvisionIdentity;
pub use trace::Trace;
