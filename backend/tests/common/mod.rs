//! Common test utilities for integration tests
//!
//! Provides a fake users store backed by a plain list and a ready-made
//! auth service wired to it.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use user_auth_backend::{config::HashingConfig, AuthService, UsersService};
use user_auth_shared::User;

/// Fake copy of the users store that also counts calls
#[derive(Default)]
pub struct FakeUsersService {
    users: Mutex<Vec<User>>,
    pub find_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl FakeUsersService {
    /// Insert a record directly, bypassing the auth service
    pub fn seed(&self, email: &str, password: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        user
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsersService for FakeUsersService {
    async fn find(&self, email: &str) -> Result<Vec<User>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| u.email == email).cloned().collect())
    }

    async fn create(&self, email: &str, password: &str) -> Result<User> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(email, password))
    }
}

/// Test application wrapper
pub struct TestApp {
    pub auth: AuthService<FakeUsersService>,
    pub users: Arc<FakeUsersService>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(FakeUsersService::default());
        let auth = AuthService::from_config(Arc::clone(&users), &test_hashing_config())
            .expect("Failed to build auth service");

        Self { auth, users }
    }

    pub fn create_calls(&self) -> usize {
        self.users.create_calls.load(Ordering::SeqCst)
    }
}

/// Cheap Argon2 parameters so the suite stays fast
pub fn test_hashing_config() -> HashingConfig {
    HashingConfig {
        memory_kib: 1024,
        iterations: 1,
        ..HashingConfig::default()
    }
}
