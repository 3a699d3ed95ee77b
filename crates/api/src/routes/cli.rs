//! Route definitions for the `/cli` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::cli;
use crate::state::AppState;

/// Routes mounted at `/cli`.
///
/// ```text
/// POST /helloworld  -> execute_command
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/helloworld", post(cli::execute_command))
}
