pub mod auth;
pub mod cli;
pub mod health;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello-world                                     public greeting
///
/// /auth/login                                      login (public)
/// /auth/logout                                     logout (token in body)
/// /auth/validate                                   validate token (public)
///
/// /cli/helloworld                                  session-gated command
///
/// /users                                           create (open), list (admin)
/// /users/{id}                                      get, update, delete (self or admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello-world", get(handlers::hello::get_hello_world))
        .nest("/auth", auth::router())
        .nest("/cli", cli::router())
        .nest("/users", users::router())
}
