//! Session model and DTOs.

use helloauth_core::roles::Role;
use helloauth_core::types::{DbId, SessionId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// The `id` is the bearer token itself, so this struct is not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: SessionId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

/// A session joined with its owner's role, as needed for token validation.
#[derive(Debug, Clone, FromRow)]
pub struct SessionOwner {
    pub session_id: SessionId,
    pub user_id: DbId,
    pub expires_at: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// Session details exposed alongside a user. Omits the token.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}

impl From<Session> for SessionSummary {
    fn from(session: Session) -> Self {
        Self {
            created_at: session.created_at,
            expires_at: session.expires_at,
        }
    }
}

/// DTO for creating a new session. The id is generated by the repository.
///
/// `created_at` and `expires_at` are both supplied by the caller so they come
/// from the same clock.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
}
