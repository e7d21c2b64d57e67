//! HTTP inbound adapter exposing the login completion endpoint and probes.

pub mod error;
pub mod health;
pub mod identity;
pub mod login;
pub mod state;

pub use error::ApiResult;
