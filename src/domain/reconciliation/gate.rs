//! Confirmation gates and the dialog dismissal guard.

use serde::Serialize;
use std::fmt;

/// Prompt shown when unfinished progress is found on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumePrompt {
    /// Answers stored in the unfinished record.
    pub answered_count: usize,
}

impl fmt::Display for ResumePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "An unfinished assessment was found on this device with {} answered question(s). \
             Continue where you left off, or start over?",
            self.answered_count
        )
    }
}

/// Prompt shown before answers are dropped because the question set changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataChangePrompt {
    /// Answers that no longer belong to the valid question set.
    pub discarded_count: usize,
    /// All answers before filtering.
    pub total_count: usize,
}

impl DataChangePrompt {
    /// Answers that will survive confirmation.
    pub fn retained_count(&self) -> usize {
        self.total_count.saturating_sub(self.discarded_count)
    }
}

impl fmt::Display for DataChangePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your profile changes switch the questionnaire version. {} of your {} answer(s) \
             do not belong to the new version and will be removed. This cannot be undone; \
             starting over is recommended for accurate results.",
            self.discarded_count, self.total_count
        )
    }
}

/// A modal question the flow is blocked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfirmationGate {
    /// Resolved by "continue" or "discard".
    Resume(ResumePrompt),
    /// Resolved by "confirm" or "restart".
    DataChange(DataChangePrompt),
}

impl fmt::Display for ConfirmationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationGate::Resume(prompt) => prompt.fmt(f),
            ConfirmationGate::DataChange(prompt) => prompt.fmt(f),
        }
    }
}

/// What to do with a close request coming from the dialog itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissDecision {
    Close,
    KeepOpen,
}

/// Separates a close already handled by a button from an implicit dismissal.
///
/// A gate arms the guard when it opens. Explicit resolutions consume it, so
/// the close callback that follows is accepted. An implicit dismissal while
/// armed and with a candidate still pending is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissGuard {
    #[default]
    Armed,
    Consumed,
}

impl DismissGuard {
    pub fn arm(&mut self) {
        *self = DismissGuard::Armed;
    }

    pub fn consume(&mut self) {
        *self = DismissGuard::Consumed;
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, DismissGuard::Consumed)
    }

    /// Decide on an implicit close request.
    ///
    /// Never changes the guard state.
    pub fn on_dismiss_requested(&self, has_pending: bool) -> DismissDecision {
        match (self, has_pending) {
            (DismissGuard::Consumed, _) => DismissDecision::Close,
            (DismissGuard::Armed, true) => DismissDecision::KeepOpen,
            (DismissGuard::Armed, false) => DismissDecision::Close,
        }
    }
}
