//! Application error handling
//!
//! Every auth operation fails with an [`AuthError`]. The three caller
//! errors carry no internals; the rest wrap what went wrong underneath
//! and are masked when rendered for clients.

use thiserror::Error;
use tracing::error;
use user_auth_shared::{AuthErrorKind, ErrorResponse, StoredPasswordError};

/// Error type returned by the auth service
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email in use")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed stored password: {0}")]
    MalformedPassword(#[from] StoredPasswordError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::DuplicateEmail => AuthErrorKind::DuplicateEmail,
            AuthError::UserNotFound => AuthErrorKind::UserNotFound,
            AuthError::InvalidCredentials => AuthErrorKind::InvalidCredentials,
            AuthError::MalformedPassword(_) => AuthErrorKind::MalformedPassword,
            AuthError::Hashing(_) => AuthErrorKind::Hashing,
            AuthError::Storage(_) => AuthErrorKind::Storage,
        }
    }

    /// Render the error as a client-facing body.
    ///
    /// Internal failures are logged here and replaced by a generic message.
    pub fn to_response(&self) -> ErrorResponse {
        let kind = self.kind();
        if kind.is_client_error() {
            return ErrorResponse::new(kind.code(), self.to_string());
        }

        error!(kind = ?kind, "Internal error: {:?}", self);
        ErrorResponse::new(kind.code(), "An internal error occurred")
    }
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        err.to_response()
    }
}

/// Result type alias for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
