//! Post-login redirect target resolution.
//!
//! Clients encode their intended destination into the opaque `state`
//! parameter at login initiation; the identity provider echoes it back
//! untouched. Decoding happens exactly once, here, at login completion.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::debug;

/// Fallback target when no usable state accompanies the completion request.
pub const DEFAULT_REDIRECT: &str = "/";

// Providers differ on whether they preserve padding, so accept both padded
// and unpadded input.
const STATE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Resolve the redirect target from an optional `state` parameter.
///
/// The state decodes as base64url UTF-8 text; everything before the first `#`
/// is the target path (the suffix is an opaque client hint and is discarded
/// without further decoding). Absent, malformed, or non-UTF-8 state falls
/// back to [`DEFAULT_REDIRECT`] — a broken redirect hint must never block a
/// successful login.
///
/// # Examples
/// ```
/// use member_gateway::domain::redirect::redirect_target;
///
/// assert_eq!(redirect_target(None), "/");
/// assert_eq!(redirect_target(Some("L2Rhc2g")), "/dash");
/// ```
pub fn redirect_target(state: Option<&str>) -> String {
    state
        .and_then(decode_state)
        .unwrap_or_else(|| DEFAULT_REDIRECT.to_owned())
}

fn decode_state(state: &str) -> Option<String> {
    let bytes = STATE_ENGINE
        .decode(state)
        .inspect_err(|error| debug!(%error, "state parameter is not base64url"))
        .ok()?;
    let decoded = String::from_utf8(bytes)
        .inspect_err(|error| debug!(%error, "state parameter is not UTF-8"))
        .ok()?;
    let target = match decoded.split_once('#') {
        Some((before, _hint)) => before.to_owned(),
        None => decoded,
    };
    Some(target)
}
