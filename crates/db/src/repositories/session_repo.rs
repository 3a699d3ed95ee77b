//! Repository for the `sessions` table.

use helloauth_core::types::{DbId, SessionId, Timestamp};
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session, SessionOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, created_at, expires_at";

/// Provides create, lookup, and delete operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session with a freshly generated id, returning the row.
    ///
    /// Fails with a foreign key violation if `user_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (id, user_id, created_at, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(SessionId::new_v4())
            .bind(input.user_id)
            .bind(input.created_at)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by id regardless of expiry.
    pub async fn find_by_id(pool: &PgPool, id: SessionId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session together with its owner's role.
    ///
    /// Expiry is not checked here; callers apply the liveness rule.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: SessionId,
    ) -> Result<Option<SessionOwner>, sqlx::Error> {
        sqlx::query_as::<_, SessionOwner>(
            "SELECT s.id AS session_id, s.user_id, s.expires_at, u.role
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List a user's sessions, newest first, including expired ones.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a single session. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: SessionId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions that are no longer valid at `now`: those with no
    /// expiry or an expiry at or before `now`. Returns the count deleted.
    pub async fn delete_expired(pool: &PgPool, now: Timestamp) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM sessions WHERE expires_at IS NULL OR expires_at <= $1")
                .bind(now)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
