//! Service entry-point: wires the login completion endpoint, health probes,
//! and OpenAPI docs.

use actix_web::{App, HttpServer, web};
use std::env;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use member_gateway::ApiDoc;
use member_gateway::Trace;
use member_gateway::domain::AuthenticatedIdentity;
use member_gateway::domain::ports::FixtureMemberLookup;
use member_gateway::inbound::http::health::{HealthState, live, ready};
use member_gateway::inbound::http::login::complete_login;
use member_gateway::inbound::http::state::HttpState;
use member_gateway::middleware::ProvisionIdentity;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::default());

    let server = HttpServer::new(move || {
        // Stand-in for the external identity-provider integration; real
        // deployments terminate the OAuth2 handshake upstream and provision
        // the asserted identity themselves.
        let identity =
            ProvisionIdentity::new(AuthenticatedIdentity::new(FixtureMemberLookup::USERNAME));

        let api = web::scope("/api/v1")
            .wrap(identity)
            .app_data(http_state.clone())
            .service(complete_login);

        let mut app = App::new()
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }

        app
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
