use std::str::FromStr;

use chrono::Duration;
use helloauth_core::session::DEFAULT_SESSION_TTL_HOURS;
use helloauth_db::DEFAULT_MAX_CONNECTIONS;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Lifetime of a newly issued session in hours (default: `24`).
    pub session_ttl_hours: i64,
    /// Interval of the expired-session reaper in seconds. `0` disables it.
    pub session_reaper_interval_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `HOST`                         | `0.0.0.0`               |
    /// | `PORT`                         | `3000`                  |
    /// | `CORS_ORIGINS`                 | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`         | `30`                    |
    /// | `SESSION_TTL_HOURS`            | `24`                    |
    /// | `SESSION_REAPER_INTERVAL_SECS` | `0`                     |
    /// | `DB_MAX_CONNECTIONS`           | `20`                    |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but does not parse, or if
    /// `SESSION_TTL_HOURS` is not positive.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_parse("PORT", 3000);

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = env_parse("REQUEST_TIMEOUT_SECS", 30);
        let session_ttl_hours: i64 = env_parse("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);
        assert!(session_ttl_hours > 0, "SESSION_TTL_HOURS must be positive");
        let session_reaper_interval_secs: u64 = env_parse("SESSION_REAPER_INTERVAL_SECS", 0);
        let db_max_connections: u32 = env_parse("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_ttl_hours,
            session_reaper_interval_secs,
            db_max_connections,
        }
    }

    /// Session lifetime as a duration.
    pub fn session_ttl(&self) -> Duration {
        Duration::hours(self.session_ttl_hours)
    }
}

/// Read `key` from the environment, falling back to `default` when unset.
fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>())),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
