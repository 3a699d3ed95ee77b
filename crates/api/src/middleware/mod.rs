//! Session-token authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the user owning a Bearer session token.
//! - [`rbac::RequireAdmin`] -- Requires the `Admin` role.
//! - [`rbac::ensure_self_or_admin`] -- Per-resource ownership check.

pub mod auth;
pub mod rbac;
