//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where and under which keys device-scoped data is kept
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding one file per key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key of the single resumable progress record
    #[serde(default = "default_progress_key")]
    pub progress_key: String,

    /// Session records are stored under `<prefix><session id>`
    #[serde(default = "default_session_key_prefix")]
    pub session_key_prefix: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if self.progress_key.is_empty() {
            return Err(ValidationError::MissingRequired("storage.progress_key"));
        }
        if self.session_key_prefix.is_empty() {
            return Err(ValidationError::MissingRequired("storage.session_key_prefix"));
        }
        if !is_key_safe(&self.progress_key) {
            return Err(ValidationError::InvalidStorageKey("storage.progress_key"));
        }
        if !is_key_safe(&self.session_key_prefix) {
            return Err(ValidationError::InvalidStorageKey("storage.session_key_prefix"));
        }
        if self.progress_key.starts_with(&self.session_key_prefix) {
            return Err(ValidationError::OverlappingKeys);
        }
        Ok(())
    }
}

/// Keys double as file names.
fn is_key_safe(key: &str) -> bool {
    !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            progress_key: default_progress_key(),
            session_key_prefix: default_session_key_prefix(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_progress_key() -> String {
    "sri_assessment_progress".to_string()
}

fn default_session_key_prefix() -> String {
    "sri_assessment_session_".to_string()
}
