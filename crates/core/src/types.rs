/// Integer primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Session identifiers double as the opaque token handed to clients.
pub type SessionId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
