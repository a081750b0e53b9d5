//! Assessment configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::FlowSettings;
use crate::domain::assessment::AssessmentType;

/// Upper bound for the results redirect pause.
const MAX_COMPLETION_DELAY_MS: u64 = 60_000;

/// Assessment variant, scale file, and presentation pacing
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AssessmentConfig {
    /// Variant a new flow runs
    #[serde(default)]
    pub default_type: AssessmentType,

    /// YAML file with scale definitions and selection rules
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Pause before the presentation surface routes to results
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl AssessmentConfig {
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("assessment.catalog_path"));
        }
        if self.completion_delay_ms > MAX_COMPLETION_DELAY_MS {
            return Err(ValidationError::DelayTooLong {
                max_ms: MAX_COMPLETION_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl From<&AssessmentConfig> for FlowSettings {
    fn from(config: &AssessmentConfig) -> Self {
        FlowSettings {
            assessment_type: config.default_type,
            completion_delay: config.completion_delay(),
        }
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_type: AssessmentType::default(),
            catalog_path: default_catalog_path(),
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./config/scales.yaml")
}

fn default_completion_delay_ms() -> u64 {
    2000
}
