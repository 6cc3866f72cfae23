//! Salted password hashing using argon2
//!
//! Passwords are stored as `<salt>.<hash>`: a hex encoded random salt and
//! the hex encoded Argon2id output derived from the password and that salt.
//!
//! # Performance Considerations
//!
//! Argon2 is intentionally CPU-intensive. In async code use the `_async`
//! variants, which run on the blocking thread pool.

use anyhow::Result;
use argon2::{
    password_hash::rand_core::{OsRng, RngCore},
    Algorithm, Argon2, Params, Version,
};
use user_auth_shared::StoredPassword;

use crate::config::HashingConfig;
use crate::error::AuthError;

/// Password hashing service
///
/// Cheap to clone; holds only the Argon2 parameters.
#[derive(Debug, Clone)]
pub struct PasswordService {
    params: Params,
    salt_bytes: usize,
}

impl PasswordService {
    /// Build a hasher from validated configuration
    pub fn new(config: &HashingConfig) -> Result<Self> {
        config.validate()?;

        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {}", e))?;

        Ok(Self {
            params,
            salt_bytes: config.salt_bytes,
        })
    }

    /// Hash a password with a fresh random salt (blocking operation)
    ///
    /// Returns the `<salt>.<hash>` string to persist.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let mut salt = vec![0u8; self.salt_bytes];
        OsRng.fill_bytes(&mut salt);
        let salt = hex::encode(salt);

        let hash = derive(self.params.clone(), password, &salt)?;
        Ok(StoredPassword::new(salt, hash).to_string())
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
    }

    /// Verify a password against a stored `<salt>.<hash>` (blocking operation)
    ///
    /// `Ok(false)` means the password is wrong; a stored value that cannot
    /// be split is an error. The output length is taken from the stored
    /// hash, so hashes written under an older `hash_length` still verify.
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, AuthError> {
        let stored = StoredPassword::parse(stored)?;

        let hex_len = stored.hash().len();
        if hex_len % 2 != 0 || hex_len / 2 < Params::MIN_OUTPUT_LEN {
            return Ok(false);
        }

        let params = Params::new(
            self.params.m_cost(),
            self.params.t_cost(),
            self.params.p_cost(),
            Some(hex_len / 2),
        )
        .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let computed = derive(params, password, stored.salt())?;
        Ok(constant_time_eq(computed.as_bytes(), stored.hash().as_bytes()))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(&self, password: String, stored: String) -> Result<bool, AuthError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|e| AuthError::Hashing(format!("Task join error: {}", e)))?
    }
}

/// Argon2id output for `password` keyed by `salt`, hex encoded
fn derive(params: Params, password: &str, salt: &str) -> Result<String, AuthError> {
    let mut output = vec![0u8; params.output_len().unwrap_or(Params::DEFAULT_OUTPUT_LEN)];
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut output)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;

    Ok(hex::encode(output))
}

/// Constant-time comparison so a mismatch does not leak how many bytes matched
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_service() -> PasswordService {
        PasswordService::new(&HashingConfig {
            memory_kib: 1024,
            iterations: 1,
            ..HashingConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = fast_service();
        let password = "secure_password_123";
        let stored = service.hash(password).unwrap();

        assert!(service.verify(password, &stored).unwrap());
        assert!(!service.verify("wrong_password", &stored).unwrap());
    }

    #[test]
    fn test_stored_format() {
        let service = fast_service();
        let stored = service.hash("correctpassword").unwrap();

        let (salt, hash) = stored.split_once('.').unwrap();
        assert_eq!(salt.len(), 16);
        assert_eq!(hash.len(), 64);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!stored.contains("correctpassword"));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let service = fast_service();
        let password = "test_password";
        let hash1 = service.hash(password).unwrap();
        let hash2 = service.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        assert!(service.verify(password, &hash1).unwrap());
        assert!(service.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_verify_malformed_stored_password() {
        let service = fast_service();
        let result = service.verify("password", "no-separator-here");
        assert!(matches!(result, Err(AuthError::MalformedPassword(_))));
    }

    #[test]
    fn test_verify_with_tampered_hash() {
        let service = fast_service();
        let stored = service.hash("password").unwrap();
        let (salt, _) = stored.split_once('.').unwrap();
        let tampered = format!("{}.{}", salt, "0".repeat(64));

        assert!(!service.verify("password", &tampered).unwrap());
    }

    #[test]
    fn test_empty_password() {
        let service = fast_service();
        let stored = service.hash("").unwrap();
        assert!(service.verify("", &stored).unwrap());
    }

    #[test]
    fn test_custom_lengths() {
        let service = PasswordService::new(&HashingConfig {
            salt_bytes: 16,
            hash_length: 16,
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();

        let stored = StoredPassword::parse(&service.hash("pw").unwrap()).unwrap();
        assert_eq!(stored.salt().len(), 32);
        assert_eq!(stored.hash().len(), 32);
    }

    #[test]
    fn test_verify_after_hash_length_change() {
        let short = PasswordService::new(&HashingConfig {
            hash_length: 16,
            memory_kib: 1024,
            iterations: 1,
            ..HashingConfig::default()
        })
        .unwrap();
        let stored = short.hash("correctpassword").unwrap();

        // Same cost settings, default 32-byte output
        let current = fast_service();
        assert!(current.verify("correctpassword", &stored).unwrap());
        assert!(!current.verify("incorrectpassword", &stored).unwrap());
    }

    #[test]
    fn test_verify_odd_length_hash_is_mismatch() {
        let service = fast_service();
        assert!(!service.verify("password", "0011223344556677.abc").unwrap());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = HashingConfig {
            parallelism: 0,
            ..HashingConfig::default()
        };
        assert!(PasswordService::new(&config).is_err());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let service = fast_service();
        let password = "async_test_password".to_string();
        let stored = service.hash_async(password.clone()).await.unwrap();

        assert!(service.verify_async(password, stored.clone()).await.unwrap());
        assert!(!service.verify_async("wrong".to_string(), stored).await.unwrap());
    }
}
