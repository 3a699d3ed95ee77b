//! helloauth API server library.
//!
//! Exposes config, state, error handling, the authentication core, and the
//! route tree so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod background;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
