//! member-gateway library modules.
//!
//! Two request-boundary concerns of a member-based web backend: centralized
//! error normalization and the terminal step of a federated (OAuth2) login
//! flow.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
