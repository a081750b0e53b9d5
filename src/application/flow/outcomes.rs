//! Values returned to the presentation surfaces by flow operations.

use std::time::Duration;

use crate::domain::assessment::{AssessmentResults, AssessmentStep};
use crate::domain::foundation::SessionId;
use crate::domain::reconciliation::DataChangePrompt;

/// Result of choosing "continue" on the resume gate.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeOutcome {
    /// Every stored answer was still valid and has been committed.
    Resumed {
        restored: usize,
        step: AssessmentStep,
    },
    /// Some answers no longer apply; the data-change gate is now open.
    DataChangeRequired(DataChangePrompt),
}

/// Result of a demographics submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DemographicsOutcome {
    /// Demographics committed and the questionnaire is showing.
    Committed,
    /// The submission would drop answers; waiting on the data-change gate.
    ConfirmationRequired(DataChangePrompt),
}

/// Result of confirming the data-change gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmOutcome {
    pub kept: usize,
    pub discarded: usize,
}

/// Where a consent or back action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Step(AssessmentStep),
    /// Leave the assessment for the external home view.
    ExitHome,
}

/// Result of a committed answer batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseUpdate {
    pub committed: usize,
    /// Entries outside the valid question set, dropped silently.
    pub dropped: usize,
}

/// A finished assessment, ready to route to results.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub session_id: SessionId,
    pub results: AssessmentResults,
    /// Pause the presentation surface should hold before routing.
    pub redirect_delay: Duration,
}
