//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Session capacity must be between 1 and {max}, got {actual}")]
    InvalidCapacity { max: usize, actual: usize },

    #[error("Maximum cost must be a finite, non-negative amount, got {0}")]
    InvalidMaxCost(f64),

    #[error("Default weekly goal must be a positive number of hours, got {0}")]
    InvalidGoalHours(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
