//! Role-based access control (RBAC) helpers.
//!
//! [`RequireAdmin`] wraps [`AuthUser`] and rejects non-admins at the type
//! level. Routes addressing a single user use [`ensure_self_or_admin`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use helloauth_core::error::CoreError;
use helloauth_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `Admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user =
            <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state).await?;
        ensure_admin(&user)?;
        Ok(RequireAdmin(user))
    }
}

/// Reject with 403 unless `user` is an admin.
pub fn ensure_admin(user: &AuthUser) -> Result<(), AppError> {
    if !user.role.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin role required".into(),
        )));
    }
    Ok(())
}

/// Reject with 403 unless `user` is the target user or an admin.
pub fn ensure_self_or_admin(user: &AuthUser, target_user_id: DbId) -> Result<(), AppError> {
    if user.user_id != target_user_id && !user.role.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the account owner or an Admin may access this user".into(),
        )));
    }
    Ok(())
}
