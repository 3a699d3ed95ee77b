use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: helloauth_db::DbPool,
    /// Server configuration (session TTL is read by the login handler).
    pub config: Arc<ServerConfig>,
}
