//! Identity provisioning middleware.
//!
//! Stand-in for the external identity-provider integration: places a
//! configured [`AuthenticatedIdentity`] into every request's extensions so
//! the completion handler can extract it. Deployments terminate the OAuth2
//! handshake upstream and provision the real identity instead.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{Ready, ready};

use crate::domain::AuthenticatedIdentity;

/// Middleware seeding each request with a fixed authenticated identity.
#[derive(Clone)]
pub struct ProvisionIdentity {
    identity: AuthenticatedIdentity,
}

impl ProvisionIdentity {
    /// Provision the given identity on every request.
    pub fn new(identity: AuthenticatedIdentity) -> Self {
        Self { identity }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ProvisionIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ProvisionIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ProvisionIdentityMiddleware {
            service,
            identity: self.identity.clone(),
        }))
    }
}

/// Service wrapper produced by [`ProvisionIdentity`].
pub struct ProvisionIdentityMiddleware<S> {
    service: S,
    identity: AuthenticatedIdentity,
}

impl<S, B> Service<ServiceRequest> for ProvisionIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        req.extensions_mut().insert(self.identity.clone());
        self.service.call(req)
    }
}
