//! Repository for the `cli_logs` table.

use helloauth_core::types::DbId;
use sqlx::PgPool;

use crate::models::cli_log::{CliLog, CreateCliLog};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, command, executed_at";

/// Append-only access to the command log.
pub struct CliLogRepo;

impl CliLogRepo {
    /// Record one command execution, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCliLog) -> Result<CliLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO cli_logs (user_id, command, executed_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CliLog>(&query)
            .bind(input.user_id)
            .bind(&input.command)
            .bind(input.executed_at)
            .fetch_one(pool)
            .await
    }

    /// List a user's log entries, oldest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CliLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cli_logs WHERE user_id = $1 ORDER BY executed_at ASC, id ASC"
        );
        sqlx::query_as::<_, CliLog>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's log entries.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cli_logs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
