//! Handler for the session-gated CLI endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::commands;
use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /cli/helloworld`.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub token: String,
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub message: &'static str,
}

/// POST /api/v1/cli/helloworld
///
/// Invalid tokens get a 200 with the invalid/expired message, not an error status.
pub async fn execute_command(
    State(state): State<AppState>,
    Json(input): Json<CommandRequest>,
) -> AppResult<Json<CommandResponse>> {
    let message = commands::execute(&state.pool, &input.token, &input.command).await?;
    Ok(Json(CommandResponse { message }))
}
