//! In-memory notifier that records every event.

use std::sync::{Arc, Mutex};

use crate::domain::assessment::{AssessmentStep, SessionEvent};
use crate::ports::SessionNotifier;

/// Records notifications for later inspection. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Target steps of every recorded step change, in order.
    pub fn step_changes(&self) -> Vec<AssessmentStep> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SessionEvent::StepChanged { to, .. } => Some(to),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl SessionNotifier for RecordingNotifier {
    fn notify(&self, event: &SessionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
