//! Key-value backed SessionRepository adapter.

use std::sync::Arc;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::SessionId;
use crate::ports::{KeyValueStore, SessionRepository, StoreError};

/// Stores each session as JSON under `<prefix><session id>`.
#[derive(Clone)]
pub struct KvSessionRepository {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl KvSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    fn key_for(&self, id: &SessionId) -> String {
        format!("{}{}", self.prefix, id)
    }
}

impl SessionRepository for KvSessionRepository {
    fn save(&self, session: &AssessmentSession) -> Result<(), StoreError> {
        let json = serde_json::to_string(session)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.store.set(&self.key_for(session.id()), &json)
    }

    fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, StoreError> {
        let Some(raw) = self.store.get(&self.key_for(id))? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "Ignoring malformed session record");
                Ok(None)
            }
        }
    }
}
