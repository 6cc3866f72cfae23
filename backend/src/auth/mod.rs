//! Authentication module
//!
//! Provides salted argon2 password hashing.

mod password;

pub use password::PasswordService;
