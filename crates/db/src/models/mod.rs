//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where the table is mutable, an update DTO (all `Option` fields)

pub mod cli_log;
pub mod session;
pub mod user;
