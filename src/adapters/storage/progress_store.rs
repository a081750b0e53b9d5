//! Progress Store Adapter
//!
//! Typed access to the single resumable progress record kept on the device.
//! Reads fail closed: anything unreadable is logged and treated as absent.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::assessment::{AssessmentSession, AssessmentType, Demographics, Response};
use crate::domain::foundation::Timestamp;
use crate::domain::reconciliation::PendingProgress;
use crate::ports::{KeyValueStore, ProgressRepository, StoreError};

/// The persisted progress record.
///
/// Shape: `{type, demographics, responses[{questionId, value, timestamp}],
/// currentPage, timestamp}` with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProgress {
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,

    #[serde(default)]
    pub responses: Vec<Response>,

    #[serde(default)]
    pub current_page: usize,

    #[serde(default)]
    pub timestamp: Timestamp,
}

impl StoredProgress {
    /// Snapshot a session's committed state.
    pub fn from_session(session: &AssessmentSession, current_page: usize) -> Self {
        Self {
            assessment_type: session.assessment_type(),
            demographics: Some(session.demographics().clone()),
            responses: session.responses().to_vec(),
            current_page,
            timestamp: Timestamp::now(),
        }
    }
}

/// Progress store keyed by a fixed device-wide key
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the raw record, whatever its assessment type.
    ///
    /// Returns `None` for a missing, unreadable, or malformed record.
    pub fn load_record(&self) -> Option<StoredProgress> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read saved progress");
                return None;
            }
        };

        match serde_json::from_str::<StoredProgress>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring malformed saved progress");
                None
            }
        }
    }

    /// Replace the record. Serialization happens before the single write.
    pub fn save_record(&self, record: &StoredProgress) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.store.set(&self.key, &json)
    }
}

impl ProgressRepository for ProgressStore {
    fn load(&self, assessment_type: AssessmentType) -> Option<PendingProgress> {
        let record = self.load_record()?;

        if record.assessment_type != assessment_type {
            tracing::debug!(
                stored = %record.assessment_type,
                active = %assessment_type,
                "Saved progress belongs to another assessment type"
            );
            return None;
        }

        Some(PendingProgress::resumed(record.demographics, record.responses))
    }

    fn save(&self, session: &AssessmentSession, current_page: usize) -> Result<(), StoreError> {
        self.save_record(&StoredProgress::from_session(session, current_page))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}
