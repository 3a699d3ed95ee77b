//! Session-token authentication extractor for Axum handlers.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use helloauth_core::error::CoreError;
use helloauth_core::roles::Role;
use helloauth_core::session::INVALID_OR_EXPIRED_MESSAGE;
use helloauth_core::types::DbId;

use crate::auth::token;
use crate::error::AppError;
use crate::state::AppState;

/// User owning the live session named by the `Authorization: Bearer` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// As `Option<AuthUser>` it resolves to `None` when the header is absent, but
/// still rejects a header carrying an invalid token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = bearer_token(parts)?.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;
        authenticate(state, bearer).await
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match bearer_token(parts)? {
            Some(bearer) => authenticate(state, bearer).await.map(Some),
            None => Ok(None),
        }
    }
}

/// The raw Bearer token, or `None` if there is no `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;
    Ok(Some(token.trim().to_string()))
}

async fn authenticate(state: &AppState, bearer: String) -> Result<AuthUser, AppError> {
    let validation = token::validate(&state.pool, &bearer).await?;
    let owner = validation.owner.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(INVALID_OR_EXPIRED_MESSAGE.into()))
    })?;

    Ok(AuthUser {
        user_id: owner.user_id,
        role: owner.role,
    })
}
