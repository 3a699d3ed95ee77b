//! Request handlers.
//!
//! Handlers delegate to the authentication core or to the repositories in
//! `helloauth_db` and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod cli;
pub mod hello;
pub mod users;
