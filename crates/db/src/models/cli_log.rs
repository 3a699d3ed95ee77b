//! CLI command log model.

use helloauth_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An append-only row from the `cli_logs` table.
#[derive(Debug, Clone, FromRow)]
pub struct CliLog {
    pub id: DbId,
    pub user_id: DbId,
    pub command: String,
    pub executed_at: Timestamp,
}

/// DTO for recording one command execution.
#[derive(Debug)]
pub struct CreateCliLog {
    pub user_id: DbId,
    pub command: String,
    pub executed_at: Timestamp,
}
