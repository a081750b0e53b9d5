//! AssessmentStep enum - the user-facing stages of an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, StateMachine};

/// Stage of the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    #[default]
    Consent,
    Demographics,
    Questionnaire,
    Processing,
    Completed,
}

impl AssessmentStep {
    /// Steps that count towards the overall progress bar.
    const PROGRESS_STEPS: [AssessmentStep; 4] = [
        AssessmentStep::Consent,
        AssessmentStep::Demographics,
        AssessmentStep::Questionnaire,
        AssessmentStep::Processing,
    ];

    /// Overall progress shown in the header bar.
    pub fn progress(&self) -> Percentage {
        let total = Self::PROGRESS_STEPS.len();
        match Self::PROGRESS_STEPS.iter().position(|s| s == self) {
            Some(index) => Percentage::of(index + 1, total),
            None => Percentage::HUNDRED,
        }
    }

    /// True where the user may press "back".
    pub fn allows_back(&self) -> bool {
        !matches!(self, AssessmentStep::Processing)
    }

    /// Step reached by "back", or `None` where back leaves the flow.
    pub fn previous(&self) -> Option<AssessmentStep> {
        match self {
            AssessmentStep::Demographics => Some(AssessmentStep::Consent),
            AssessmentStep::Questionnaire => Some(AssessmentStep::Demographics),
            _ => None,
        }
    }
}

impl StateMachine for AssessmentStep {
    /// Valid transitions:
    /// - Consent -> Demographics
    /// - Demographics -> Consent | Questionnaire
    /// - Questionnaire -> Demographics | Processing
    /// - Processing -> Completed | Questionnaire (scoring failed)
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStep::*;
        matches!(
            (self, target),
            (Consent, Demographics)
                | (Demographics, Consent)
                | (Demographics, Questionnaire)
                | (Questionnaire, Demographics)
                | (Questionnaire, Processing)
                | (Processing, Completed)
                | (Processing, Questionnaire)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStep::*;
        match self {
            Consent => vec![Demographics],
            Demographics => vec![Consent, Questionnaire],
            Questionnaire => vec![Demographics, Processing],
            Processing => vec![Completed, Questionnaire],
            Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStep::Consent => "consent",
            AssessmentStep::Demographics => "demographics",
            AssessmentStep::Questionnaire => "questionnaire",
            AssessmentStep::Processing => "processing",
            AssessmentStep::Completed => "completed",
        };
        f.write_str(s)
    }
}
