//! Tracing setup for applications embedding the auth service

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LoggingConfig};

/// Initialize tracing/logging
///
/// RUST_LOG wins over the configured filter. Output is JSON in production
/// or when `json` is set, pretty otherwise. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json || AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .is_ok()
    }
}
