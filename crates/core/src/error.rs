use crate::types::DbId;

/// Domain-level failures shared across crates.
///
/// The API layer maps each variant onto an HTTP status in `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A role string that is neither `Admin` nor `User`.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
