//! User Auth Backend Library
//!
//! Sign-up and sign-in over a pluggable users store, with salted argon2
//! password hashing.
//!
//! ```ignore
//! let config = AppConfig::load()?;
//! telemetry::init_tracing(&config.logging);
//!
//! let users = Arc::new(InMemoryUsersService::new());
//! let auth = AuthService::from_config(users, &config.hashing)?;
//! let user = auth.sign_up("user@example.com", "correctpassword").await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;

pub use error::{AuthError, AuthResult};
pub use services::{AuthService, InMemoryUsersService, UsersService};
