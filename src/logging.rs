//! Structured logging setup.
//!
//! Log output goes to stderr so the interactive prompts on stdout stay clean.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to set global subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the active filter.
///
/// `--verbose` wins, then `RUST_LOG`, then the configured level.
pub fn build_filter(
    config: &LoggingConfig,
    verbose: bool,
    rust_log: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    let directive = if verbose {
        "debug"
    } else {
        rust_log
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(config.level.as_str())
    };

    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global tracing subscriber.
///
/// Call once at startup.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<(), LoggingError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, verbose, rust_log.as_deref())?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }

    tracing::debug!(level = %config.level, verbose, json = config.json, "Logging initialized");
    Ok(())
}
