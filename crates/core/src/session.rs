//! Session lifetime and token rules.
//!
//! A session token is the session's UUID rendered in hyphenated form. Expiry
//! is passive: a session is live only while its `expires_at` lies strictly in
//! the future, measured against UTC.

use chrono::Duration;

use crate::types::{SessionId, Timestamp};

/// Default session lifetime in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

pub const TOKEN_VALID_MESSAGE: &str = "Token validated successfully.";
pub const INVALID_TOKEN_FORMAT_MESSAGE: &str = "Invalid token format.";
/// Returned for both missing and expired sessions.
pub const INVALID_OR_EXPIRED_MESSAGE: &str = "Invalid or expired token.";

/// Compute the expiry for a session issued at `now`.
pub fn expiry_from(now: Timestamp, ttl: Duration) -> Timestamp {
    now + ttl
}

/// Whether a session with the given expiry is still valid at `now`.
///
/// Sessions without an expiry are never valid.
pub fn is_live(expires_at: Option<Timestamp>, now: Timestamp) -> bool {
    matches!(expires_at, Some(at) if at > now)
}

/// Parse an opaque token back into a session id.
///
/// Only the exact form produced by [`format_token`] is accepted. Other
/// renderings of the same UUID (braced, URN, simple, uppercase) are rejected.
pub fn parse_token(token: &str) -> Option<SessionId> {
    let id = SessionId::parse_str(token).ok()?;
    (format_token(id) == token).then_some(id)
}

/// Render a session id as the token handed to clients.
pub fn format_token(id: SessionId) -> String {
    id.hyphenated().to_string()
}
