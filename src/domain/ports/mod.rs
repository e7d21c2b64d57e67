//! Domain ports for the login completion boundary.
//!
//! In hexagonal terms these are *driven* collaborators: the completion flow
//! calls them without knowing the backing infrastructure, so handler tests
//! can substitute deterministic doubles instead of wiring persistence.

mod member_lookup;
mod token_issuer;

#[cfg(test)]
pub use member_lookup::MockMemberLookup;
pub use member_lookup::{FixtureMemberLookup, MemberLookup};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{FixtureTokenIssuer, TokenIssuer};
