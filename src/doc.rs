//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST surface: the
//! login completion endpoint, the health probes, and the shared error
//! envelope schema. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "member-gateway API",
        description = "Federated login completion and normalized error envelopes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::login::complete_login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "auth", description = "Federated login completion"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
