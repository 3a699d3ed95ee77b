//! Token validation.
//!
//! Read-only: validating a token never changes stored state, so it is safe to
//! call any number of times. Missing and expired sessions produce the same
//! result.

use chrono::Utc;
use helloauth_core::roles::Role;
use helloauth_core::session::{
    is_live, parse_token, INVALID_OR_EXPIRED_MESSAGE, INVALID_TOKEN_FORMAT_MESSAGE,
    TOKEN_VALID_MESSAGE,
};
use helloauth_core::types::{DbId, Timestamp};
use helloauth_db::repositories::SessionRepo;
use sqlx::PgPool;

/// Who a valid token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOwner {
    pub user_id: DbId,
    pub role: Role,
}

/// Outcome of validating a token. `owner` is set only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub owner: Option<TokenOwner>,
    pub message: &'static str,
}

impl ValidationResult {
    fn valid(owner: TokenOwner) -> Self {
        Self {
            owner: Some(owner),
            message: TOKEN_VALID_MESSAGE,
        }
    }

    fn invalid(message: &'static str) -> Self {
        Self {
            owner: None,
            message,
        }
    }

    pub fn success(&self) -> bool {
        self.owner.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.owner.map(|o| o.role)
    }
}

/// Validate `token` against the current UTC time.
pub async fn validate(pool: &PgPool, token: &str) -> Result<ValidationResult, sqlx::Error> {
    validate_at(pool, token, Utc::now()).await
}

/// Validate `token` as of `now`.
pub async fn validate_at(
    pool: &PgPool,
    token: &str,
    now: Timestamp,
) -> Result<ValidationResult, sqlx::Error> {
    let Some(session_id) = parse_token(token) else {
        return Ok(ValidationResult::invalid(INVALID_TOKEN_FORMAT_MESSAGE));
    };

    let result = match SessionRepo::find_with_owner(pool, session_id).await? {
        Some(session) if is_live(session.expires_at, now) => ValidationResult::valid(TokenOwner {
            user_id: session.user_id,
            role: session.role,
        }),
        _ => ValidationResult::invalid(INVALID_OR_EXPIRED_MESSAGE),
    };
    Ok(result)
}
