//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureMemberLookup, FixtureTokenIssuer, MemberLookup, TokenIssuer};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub members: Arc<dyn MemberLookup>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl HttpState {
    /// Construct state over explicit port implementations.
    pub fn new(members: Arc<dyn MemberLookup>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { members, tokens }
    }
}

impl Default for HttpState {
    /// Fixture-backed state used until real collaborators are wired.
    fn default() -> Self {
        Self::new(Arc::new(FixtureMemberLookup), Arc::new(FixtureTokenIssuer))
    }
}
