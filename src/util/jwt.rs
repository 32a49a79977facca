//! Defensive JWT payload decoding.
//!
//! The client never verifies signatures — the server is the authority on
//! token validity. Decoding here only recovers the display claims, and any
//! malformed input resolves to `None` rather than an error so a stale or
//! corrupt stored token degrades to "no session" instead of breaking startup.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Claims carried in the token payload that the UI actually uses.
///
/// Unknown payload fields are ignored; `id` and `username` are required for
/// the claims to count as a usable identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier assigned by the server.
    pub id: String,
    /// Display name shown in the header.
    pub username: String,
    /// Issued-at (Unix timestamp, seconds). Not all tokens carry it.
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the claims from a compact JWT without verifying the signature.
///
/// Returns `None` if the token is not three dot-separated segments, the
/// payload is not valid base64url, or the JSON lacks the required fields.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    segments.next()?;

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
