//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! collaborators such as the users store and the password hasher.

pub mod auth;
pub mod users;

pub use auth::AuthService;
pub use users::{InMemoryUsersService, UsersService};
