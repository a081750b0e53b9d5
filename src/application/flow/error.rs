//! Errors returned by the assessment flow.

use crate::domain::assessment::AssessmentStep;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::ScoringError;

/// Why a flow operation was refused.
///
/// Store failures never appear here: they are logged and the in-memory
/// transition proceeds.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FlowError {
    #[error("A confirmation is waiting for the user")]
    ConfirmationPending,

    #[error("No saved progress is waiting for a decision")]
    NoPendingProgress,

    #[error("No {0} confirmation is open")]
    GateNotOpen(&'static str),

    #[error("Demographics must be submitted first")]
    DemographicsRequired,

    #[error("Answers are not accepted at the {0} step")]
    AnswersNotAccepted(AssessmentStep),

    #[error("Invalid step transition: {0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("Could not calculate results: {0}")]
    ScoringFailed(#[from] ScoringError),
}

impl FlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::ConfirmationPending => ErrorCode::ConfirmationPending,
            FlowError::NoPendingProgress | FlowError::GateNotOpen(_) => {
                ErrorCode::NoPendingProgress
            }
            FlowError::DemographicsRequired => ErrorCode::DemographicsRequired,
            FlowError::AnswersNotAccepted(_) | FlowError::InvalidTransition(_) => {
                ErrorCode::InvalidStateTransition
            }
            FlowError::ScoringFailed(_) => ErrorCode::ScoringFailed,
        }
    }
}

impl From<FlowError> for DomainError {
    fn from(err: FlowError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
