//! Notifications the flow emits to presentation collaborators.
//!
//! - `StepChanged` - routing and scroll reset
//! - `GateOpened` / `GateClosed` - modal dialog visibility
//! - `ResponsesCommitted` - answered-count readout
//! - `ScoringFailed` - transient user-visible error
//! - `Completed` - route to results after the given delay

use serde::Serialize;
use std::time::Duration;

use super::AssessmentStep;
use crate::domain::foundation::SessionId;
use crate::domain::reconciliation::ConfirmationGate;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    StepChanged {
        from: AssessmentStep,
        to: AssessmentStep,
    },
    GateOpened {
        gate: ConfirmationGate,
    },
    GateClosed,
    ResponsesCommitted {
        count: usize,
    },
    ScoringFailed {
        message: String,
    },
    Completed {
        session_id: SessionId,
        #[serde(with = "duration_millis")]
        redirect_delay: Duration,
    },
}

impl SessionEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::StepChanged { .. } => "step_changed",
            SessionEvent::GateOpened { .. } => "gate_opened",
            SessionEvent::GateClosed => "gate_closed",
            SessionEvent::ResponsesCommitted { .. } => "responses_committed",
            SessionEvent::ScoringFailed { .. } => "scoring_failed",
            SessionEvent::Completed { .. } => "completed",
        }
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
