//! Users collaborator
//!
//! The auth service only needs to look users up by email and create
//! them. Storage is pluggable behind [`UsersService`]; an in-memory
//! implementation is provided for embedding and tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use user_auth_shared::User;

/// Lookup and creation of user records
#[async_trait]
pub trait UsersService: Send + Sync {
    /// All users whose email matches exactly
    async fn find(&self, email: &str) -> Result<Vec<User>>;

    /// Persist a new user; `password` is already salted and hashed
    async fn create(&self, email: &str, password: &str) -> Result<User>;
}

/// In-memory users store
///
/// Ids come from a monotonic counter starting at 1. Email uniqueness is
/// left to the caller.
#[derive(Debug)]
pub struct InMemoryUsersService {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUsersService {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUsersService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn find(&self, email: &str) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.email == email).cloned().collect())
    }

    async fn create(&self, email: &str, password: &str) -> Result<User> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            email: email.to_string(),
            password: password.to_string(),
        };

        self.users.write().await.push(user.clone());
        Ok(user)
    }
}
