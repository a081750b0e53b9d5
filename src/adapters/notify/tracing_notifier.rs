//! Notifier that writes each event to the tracing log.

use crate::domain::assessment::SessionEvent;
use crate::ports::SessionNotifier;

/// Logs notifications; used when no presentation surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl SessionNotifier for TracingNotifier {
    fn notify(&self, event: &SessionEvent) {
        match event {
            SessionEvent::ScoringFailed { message } => {
                tracing::warn!(event = event.name(), %message, "Session notification");
            }
            _ => tracing::debug!(event = event.name(), payload = ?event, "Session notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentStep;
    use crate::domain::foundation::SessionId;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn logs_every_event_kind() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        let notifier: Arc<dyn SessionNotifier> = Arc::new(TracingNotifier);

        for event in [
            SessionEvent::StepChanged {
                from: AssessmentStep::Consent,
                to: AssessmentStep::Demographics,
            },
            SessionEvent::GateClosed,
            SessionEvent::ResponsesCommitted { count: 4 },
            SessionEvent::ScoringFailed {
                message: "engine unavailable".into(),
            },
            SessionEvent::Completed {
                session_id: SessionId::new(),
                redirect_delay: Duration::from_millis(2000),
            },
        ] {
            notifier.notify(&event);
        }
    }
}
