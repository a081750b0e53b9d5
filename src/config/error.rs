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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Storage key '{0}' may only contain letters, digits, '_', '-' and '.'")]
    InvalidStorageKey(&'static str),

    #[error("Progress key must not start with the session key prefix")]
    OverlappingKeys,

    #[error("Completion delay exceeds maximum allowed ({max_ms} ms)")]
    DelayTooLong { max_ms: u64 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
