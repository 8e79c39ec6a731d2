//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EMBROIDERY_TRACKER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use embroidery_tracker::config::AppConfig;
//!
//! let config = AppConfig::load()
//!     .and_then(AppConfig::validated)
//!     .expect("Invalid configuration");
//!
//! println!("Reports go to {}", config.report.path.display());
//! ```

mod error;
mod logging;
mod recommendation;
mod report;
mod tracker;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use recommendation::RecommendationConfig;
pub use report::ReportConfig;
pub use tracker::{TrackerConfig, MAX_CAPACITY};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AppConfig {
    /// Session store configuration (capacity)
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Recommendation thresholds (cost ceiling, default goal)
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// Report output configuration (file path)
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `EMBROIDERY_TRACKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EMBROIDERY_TRACKER__TRACKER__CAPACITY=8` -> `tracker.capacity = 8`
    /// - `EMBROIDERY_TRACKER__RECOMMENDATION__MAX_COST=40` -> `recommendation.max_cost = 40.0`
    /// - `EMBROIDERY_TRACKER__REPORT__PATH=out/week.txt` -> `report.path = "out/week.txt"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EMBROIDERY_TRACKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Replaces the report path when one is given, e.g. from `--report-path`.
    pub fn with_report_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.report.path = path;
        }
        self
    }

    /// Validates and hands the configuration back.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for the first invalid section.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.tracker.validate()?;
        self.recommendation.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
