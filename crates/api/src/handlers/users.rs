//! Handlers for the `/users` resource.
//!
//! Registration is open for the `User` role; creating an `Admin` needs an
//! admin session. Reading, updating, and deleting a user needs that user's
//! own session or an admin's.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helloauth_core::error::CoreError;
use helloauth_core::roles::Role;
use helloauth_core::types::DbId;
use helloauth_db::models::session::SessionSummary;
use helloauth_db::models::user::{CreateUser, UpdateUser, UserResponse};
use helloauth_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::hash_password;
use crate::auth::session::normalize_email;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{ensure_admin, ensure_self_or_admin, RequireAdmin};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::User
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct UserDetailsResponse {
    pub id: DbId,
    pub email: String,
    pub role: Role,
    pub sessions: Vec<SessionSummary>,
}

/// Request body for `PUT /users/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub success: bool,
    pub user_id: DbId,
    pub email: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub deleted: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users
///
/// Hash the password and insert the user. Returns 201 with the new id, or
/// 409 if the email is taken.
pub async fn create_user(
    State(state): State<AppState>,
    requester: Option<AuthUser>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    if input.role.is_admin() {
        let requester = requester.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "An Admin session is required to create an Admin user".into(),
            ))
        })?;
        ensure_admin(&requester)?;
    }

    let email = required_email(input.email)?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            role: input.role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(CreateUserResponse { user_id: user.id })))
}

/// GET /api/v1/users
///
/// List all users (admin only).
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/users/{id}
///
/// Get a user with their sessions, newest first.
pub async fn get_user(
    State(state): State<AppState>,
    requester: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDetailsResponse>> {
    ensure_self_or_admin(&requester, id)?;

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let sessions = SessionRepo::list_for_user(&state.pool, id)
        .await?
        .into_iter()
        .map(SessionSummary::from)
        .collect();

    Ok(Json(UserDetailsResponse {
        id: user.id,
        email: user.email,
        role: user.role,
        sessions,
    }))
}

/// PUT /api/v1/users/{id}
///
/// Change email and/or password. Outcomes other than a duplicate email are
/// reported in the body.
pub async fn update_user(
    State(state): State<AppState>,
    requester: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UpdateUserResponse>> {
    ensure_self_or_admin(&requester, id)?;

    let email = input.email.map(required_email).transpose()?;
    let password_hash = input
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let update = UpdateUser {
        email,
        password_hash,
    };

    if update.is_empty() {
        return Ok(Json(UpdateUserResponse {
            success: false,
            user_id: id,
            email: None,
            message: "No updates provided.".into(),
        }));
    }

    let response = match UserRepo::update(&state.pool, id, &update).await? {
        Some(user) => {
            tracing::info!(user_id = id, "User updated");
            UpdateUserResponse {
                success: true,
                user_id: id,
                email: Some(user.email),
                message: "User updated successfully.".into(),
            }
        }
        None => UpdateUserResponse {
            success: false,
            user_id: id,
            email: update.email,
            message: "User not found.".into(),
        },
    };
    Ok(Json(response))
}

/// DELETE /api/v1/users/{id}
///
/// Delete the user along with their sessions and command log.
pub async fn delete_user(
    State(state): State<AppState>,
    requester: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteUserResponse>> {
    ensure_self_or_admin(&requester, id)?;

    let response = if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, deleted_by = requester.user_id, "User deleted");
        DeleteUserResponse {
            message: "User deleted successfully".into(),
            deleted: true,
        }
    } else {
        DeleteUserResponse {
            message: format!("User with ID {id} not found."),
            deleted: false,
        }
    };
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Normalize an email and reject it if blank.
fn required_email(email: String) -> AppResult<String> {
    let trimmed = normalize_email(&email);
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email must not be empty".into(),
        )));
    }
    Ok(trimmed.to_string())
}
