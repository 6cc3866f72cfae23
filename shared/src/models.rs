//! Data models for the User Auth application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StoredPasswordError;

/// User account
///
/// `password` holds the `<salt>.<hash>` string, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Parse the stored password into its salt and hash halves
    pub fn stored_password(&self) -> Result<StoredPassword, StoredPasswordError> {
        self.password.parse()
    }
}

/// A salted password hash as persisted on a [`User`].
///
/// Rendered as `<salt>.<hash>`; the salt never contains a `.`, so parsing
/// splits on the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPassword {
    salt: String,
    hash: String,
}

impl StoredPassword {
    pub fn new(salt: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            hash: hash.into(),
        }
    }

    pub fn parse(stored: &str) -> Result<Self, StoredPasswordError> {
        let (salt, hash) = stored
            .split_once('.')
            .ok_or(StoredPasswordError::MissingSeparator)?;

        if salt.is_empty() {
            return Err(StoredPasswordError::EmptySalt);
        }
        if hash.is_empty() {
            return Err(StoredPasswordError::EmptyHash);
        }

        Ok(Self::new(salt, hash))
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl FromStr for StoredPassword {
    type Err = StoredPasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StoredPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.salt, self.hash)
    }
}
