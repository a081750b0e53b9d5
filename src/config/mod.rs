//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `ADAPTIVE_ASSESSMENT`
//! prefix and nested values are separated by double underscores. Every
//! setting has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use adaptive_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Progress lives in {}", config.storage.data_dir.display());
//! ```

mod assessment;
mod error;
mod logging;
mod storage;

pub use assessment::AssessmentConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Key-value store location and key names
    #[serde(default)]
    pub storage: StorageConfig,

    /// Assessment variant and scale file
    #[serde(default)]
    pub assessment: AssessmentConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ADAPTIVE_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ADAPTIVE_ASSESSMENT__STORAGE__DATA_DIR=/var/lib/sri` -> `storage.data_dir`
    /// - `ADAPTIVE_ASSESSMENT__ASSESSMENT__DEFAULT_TYPE=full` -> `assessment.default_type`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ADAPTIVE_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty or unsafe storage keys, an empty
    /// catalog path, an oversized completion delay, or a bad log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.assessment.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
