//! Configuration management for the User Auth backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: AUTH__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub hashing: HashingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Password hashing configuration
///
/// Salts are hex encoded before use, so `salt_bytes` random bytes become
/// `2 * salt_bytes` salt characters.
///
/// The stored `salt.hash` format records none of the Argon2 cost
/// settings. Changing `memory_kib`, `iterations` or `parallelism` makes
/// every existing password fail verification. `salt_bytes` and
/// `hash_length` are safe to change; verification reads both back from
/// the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    pub salt_bytes: usize,
    pub hash_length: usize,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            salt_bytes: 8,
            hash_length: 32,
            memory_kib: 19_456, // 19 MiB, the Argon2id baseline
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl HashingConfig {
    /// Reject parameters Argon2 cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.salt_bytes < 4 {
            anyhow::bail!("hashing.salt_bytes must be at least 4");
        }
        if self.hash_length < 4 {
            anyhow::bail!("hashing.hash_length must be at least 4");
        }
        if self.iterations == 0 {
            anyhow::bail!("hashing.iterations must be at least 1");
        }
        if self.parallelism == 0 {
            anyhow::bail!("hashing.parallelism must be at least 1");
        }
        if self.memory_kib < 8 * self.parallelism {
            anyhow::bail!("hashing.memory_kib must be at least 8 * parallelism");
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directives, used when RUST_LOG is unset
    pub filter: String,
    /// Force JSON output outside production
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "user_auth_backend=debug".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with AUTH__ prefix
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // e.g., AUTH__HASHING__ITERATIONS=3 sets hashing.iterations
        Self::load_from(&env, environment())
    }

    /// Load for an explicit environment name and variable source
    pub fn load_from(env_name: &str, environment: config::Environment) -> Result<Self> {
        let config_file = format!("config/{}.toml", env_name);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(environment)
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.hashing.validate()?;

        Ok(config)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        is_production_env(env::var("RUST_ENV").ok().as_deref())
    }
}

/// `AUTH__`-prefixed environment variables
pub fn environment() -> config::Environment {
    config::Environment::with_prefix("AUTH").separator("__")
}

fn is_production_env(rust_env: Option<&str>) -> bool {
    rust_env == Some("production")
}
