//! Authentication core.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- login (session issuance) and logout.
//! - [`token`] -- token validation against stored sessions.

pub mod password;
pub mod session;
pub mod token;
