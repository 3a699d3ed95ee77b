//! Domain types shared by the database and API layers.
//!
//! Nothing in this crate touches the network or the database, so every rule
//! here can be unit-tested in isolation.

pub mod commands;
pub mod error;
pub mod roles;
pub mod session;
pub mod types;
