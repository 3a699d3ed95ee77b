//! Periodic removal of expired sessions.
//!
//! Expiry is enforced at validation time regardless; this job only keeps the
//! `sessions` table from growing without bound. Disabled unless
//! `SESSION_REAPER_INTERVAL_SECS` is set.

use std::time::Duration;

use chrono::Utc;
use helloauth_db::repositories::SessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Run the reaper loop until `cancel` is triggered.
pub async fn run(pool: PgPool, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = interval.as_secs(), "Session reaper started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session reaper stopping");
                break;
            }
            _ = ticker.tick() => {
                match SessionRepo::delete_expired(&pool, Utc::now()).await {
                    Ok(0) => tracing::debug!("Session reaper: nothing to delete"),
                    Ok(deleted) => tracing::info!(deleted, "Session reaper: purged expired sessions"),
                    Err(e) => tracing::error!(error = %e, "Session reaper: cleanup failed"),
                }
            }
        }
    }
}
