//! Handlers for the `/auth` resource (login, logout, validate).

use axum::extract::State;
use axum::Json;
use helloauth_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::auth::session::{self, LogoutError};
use crate::auth::token;
use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub auth_token: String,
    pub expires_at: Timestamp,
}

/// Request body for `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub session_token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub logout_success: bool,
    pub message: String,
}

/// Request body for `POST /auth/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub message: &'static str,
    /// Zero or one role name.
    pub allowed_roles: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Exchange email + password for a session token. Returns 401 on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let issued = session::login(
        &state.pool,
        &input.email,
        &input.password,
        state.config.session_ttl(),
    )
    .await?;

    Ok(Json(LoginResponse {
        auth_token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// POST /api/v1/auth/logout
///
/// Delete the given session. Unknown sessions and store failures are both
/// reported in the body rather than as HTTP errors.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<LogoutRequest>,
) -> Json<LogoutResponse> {
    let (logout_success, message) = match session::logout(&state.pool, &input.session_token).await
    {
        Ok(()) => (true, "Successfully logged out.".to_string()),
        Err(LogoutError::NotFound) => (false, "Session not found".to_string()),
        Err(LogoutError::Database(e)) => {
            tracing::error!(error = %e, "Logout failed");
            (false, "Logout failed.".to_string())
        }
    };

    Json(LogoutResponse {
        logout_success,
        message,
    })
}

/// POST /api/v1/auth/validate
///
/// Report whether a token names a live session, and the owner's role if so.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<ValidateRequest>,
) -> AppResult<Json<ValidateResponse>> {
    let result = token::validate(&state.pool, &input.token).await?;

    Ok(Json(ValidateResponse {
        success: result.success(),
        message: result.message,
        allowed_roles: result
            .role()
            .map(|role| role.as_str().to_string())
            .into_iter()
            .collect(),
    }))
}
