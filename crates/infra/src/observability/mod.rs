//! Tracing subscriber setup
//!
//! The engines never log. Services and storage adapters emit `tracing`
//! events with structured fields; this module installs the subscriber that
//! renders them.

use timepal_domain::{LoggingConfig, Result, TimePalError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` wins, then the configured level.
///
/// # Errors
/// Returns `TimePalError::Config` when the configured level is not a valid
/// filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| TimePalError::Config(format!("Invalid log level {:?}: {e}", config.level)))
}

/// Install the global subscriber, plain or JSON lines per `config.json`.
///
/// # Errors
/// Returns `TimePalError::Config` for an invalid level, or when a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed
        .map_err(|e| TimePalError::Config(format!("Failed to install tracing subscriber: {e}")))?;
    tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    Ok(())
}
