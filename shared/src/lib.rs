//! User Auth Shared Library
//!
//! This crate contains the plain data types shared between the auth
//! backend and anything that embeds it: the user record, the stored
//! password format and the closed set of error kinds.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::{StoredPassword, User};
pub use types::{ErrorDetail, ErrorResponse};
