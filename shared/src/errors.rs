//! Error types for the User Auth application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure kinds an auth operation can end with.
///
/// The first three are caller errors; the rest are implementation
/// failures that callers cannot fix by changing their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    DuplicateEmail,
    UserNotFound,
    InvalidCredentials,
    MalformedPassword,
    Hashing,
    Storage,
}

impl AuthErrorKind {
    /// Stable error code, aligned with the HTTP status family an API
    /// layer would pick for the kind.
    pub fn code(self) -> &'static str {
        match self {
            AuthErrorKind::DuplicateEmail | AuthErrorKind::InvalidCredentials => "BAD_REQUEST",
            AuthErrorKind::UserNotFound => "NOT_FOUND",
            AuthErrorKind::MalformedPassword | AuthErrorKind::Hashing | AuthErrorKind::Storage => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            AuthErrorKind::DuplicateEmail
                | AuthErrorKind::UserNotFound
                | AuthErrorKind::InvalidCredentials
        )
    }
}

/// Errors raised when parsing a stored `salt.hash` password
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoredPasswordError {
    #[error("stored password has no '.' separator")]
    MissingSeparator,

    #[error("stored password has an empty salt")]
    EmptySalt,

    #[error("stored password has an empty hash")]
    EmptyHash,
}
