//! Session-gated CLI command execution.
//!
//! Once a token validates, every command is logged before it is answered,
//! recognized or not. Invalid tokens are answered without touching the log.

use chrono::Utc;
use helloauth_core::commands::respond_to;
use helloauth_core::session::INVALID_OR_EXPIRED_MESSAGE;
use helloauth_core::types::Timestamp;
use helloauth_db::models::cli_log::CreateCliLog;
use helloauth_db::repositories::CliLogRepo;
use sqlx::PgPool;

use crate::auth::token;

/// Run `command` on behalf of the session named by `token`.
pub async fn execute(pool: &PgPool, token: &str, command: &str) -> Result<&'static str, sqlx::Error> {
    execute_at(pool, token, command, Utc::now()).await
}

/// Run `command` as of `now`. Validation and the log timestamp use the same instant.
pub async fn execute_at(
    pool: &PgPool,
    token: &str,
    command: &str,
    now: Timestamp,
) -> Result<&'static str, sqlx::Error> {
    let validation = token::validate_at(pool, token, now).await?;
    let Some(owner) = validation.owner else {
        return Ok(INVALID_OR_EXPIRED_MESSAGE);
    };

    CliLogRepo::create(
        pool,
        &CreateCliLog {
            user_id: owner.user_id,
            command: command.to_string(),
            executed_at: now,
        },
    )
    .await?;

    let reply = respond_to(command);
    tracing::info!(user_id = owner.user_id, command, reply, "CLI command executed");
    Ok(reply)
}
