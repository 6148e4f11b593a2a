//! Logging setup.
//!
//! Installs a console `tracing` subscriber. `RUST_LOG`, when set and valid,
//! takes precedence over the configured filter.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Resolve the effective filter: `RUST_LOG` first, then `default_filter`.
pub fn resolve_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::InvalidFilter {
        filter: default_filter.to_string(),
        source,
    })
}

/// Install the global subscriber. Fails (without panicking) if one is
/// already installed.
pub fn init_logging(default_filter: &str) -> Result<(), TelemetryError> {
    let filter = resolve_filter(default_filter)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    tracing::debug!(default_filter, "logging initialized");
    Ok(())
}
