//! Session issuance and invalidation.
//!
//! A successful login inserts one `sessions` row and hands its id back as the
//! opaque token. Users may hold any number of concurrent sessions.

use chrono::{Duration, Utc};
use helloauth_core::session::{expiry_from, format_token, parse_token};
use helloauth_core::types::Timestamp;
use helloauth_db::models::session::CreateSession;
use helloauth_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::password::verify_password;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are not distinguished.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A freshly created session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Canonical form of an email for storage and lookup.
pub fn normalize_email(email: &str) -> &str {
    email.trim()
}

/// Check credentials and, if they match, open a session lasting `ttl`.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    ttl: Duration,
) -> Result<IssuedSession, AuthError> {
    let Some(user) = UserRepo::find_by_email(pool, normalize_email(email)).await? else {
        tracing::info!("Login rejected: unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let now = Utc::now();
    let expires_at = expiry_from(now, ttl);
    let session = SessionRepo::create(
        pool,
        &CreateSession {
            user_id: user.id,
            created_at: now,
            expires_at: Some(expires_at),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, %expires_at, "Session issued");

    Ok(IssuedSession {
        token: format_token(session.id),
        expires_at,
    })
}

/// Delete the session named by `token`.
///
/// An unparsable token is reported the same way as an unknown one.
pub async fn logout(pool: &PgPool, token: &str) -> Result<(), LogoutError> {
    let session_id = parse_token(token).ok_or(LogoutError::NotFound)?;

    if !SessionRepo::delete(pool, session_id).await? {
        return Err(LogoutError::NotFound);
    }

    tracing::info!(%session_id, "Session closed");
    Ok(())
}
