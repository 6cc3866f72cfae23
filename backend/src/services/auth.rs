//! Auth service: sign-up and sign-in
//!
//! # Performance
//!
//! Password hashing and verification run on the blocking thread pool
//! via [`PasswordService`]'s async variants.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use user_auth_shared::User;

use crate::auth::PasswordService;
use crate::config::HashingConfig;
use crate::error::{AuthError, AuthResult};
use crate::services::users::UsersService;

/// Signs users up and in on top of a [`UsersService`]
///
/// Clones share one sign-up lock, so the email uniqueness check holds
/// across every clone of a service.
pub struct AuthService<U: UsersService + ?Sized> {
    users: Arc<U>,
    passwords: PasswordService,
    sign_up_lock: Arc<Mutex<()>>,
}

impl<U: UsersService + ?Sized> Clone for AuthService<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            passwords: self.passwords.clone(),
            sign_up_lock: Arc::clone(&self.sign_up_lock),
        }
    }
}

impl<U: UsersService + ?Sized> AuthService<U> {
    pub fn new(users: Arc<U>, passwords: PasswordService) -> Self {
        Self {
            users,
            passwords,
            sign_up_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Build the service with a hasher configured from `config`
    pub fn from_config(users: Arc<U>, config: &HashingConfig) -> anyhow::Result<Self> {
        Ok(Self::new(users, PasswordService::new(config)?))
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    /// Register a new user
    ///
    /// Fails with [`AuthError::DuplicateEmail`] if any user already has
    /// this exact email. The returned user carries the `<salt>.<hash>`
    /// password that was stored.
    ///
    /// The lookup and the create run under the sign-up lock; hashing
    /// happens before the lock is taken.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<User> {
        let stored = self.passwords.hash_async(password.to_string()).await?;

        let _guard = self.sign_up_lock.lock().await;
        if !self.users.find(email).await?.is_empty() {
            warn!(email, "Sign-up rejected: email in use");
            return Err(AuthError::DuplicateEmail);
        }

        let user = self.users.create(email, &stored).await?;

        debug!(user_id = user.id, email, "User signed up");
        Ok(user)
    }

    /// Check credentials and return the matching user
    ///
    /// Fails with [`AuthError::UserNotFound`] for an unknown email and
    /// [`AuthError::InvalidCredentials`] for a wrong password.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User> {
        let user = self
            .users
            .find(email)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                warn!(email, "Sign-in rejected: user not found");
                AuthError::UserNotFound
            })?;

        let valid = self
            .passwords
            .verify_async(password.to_string(), user.password.clone())
            .await?;

        if !valid {
            warn!(user_id = user.id, "Sign-in rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        debug!(user_id = user.id, "User signed in");
        Ok(user)
    }
}
