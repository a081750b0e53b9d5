//! ScoringEngine Port - the opaque scoring function.

use crate::domain::assessment::{AssessmentResults, Response};
use crate::domain::foundation::SessionId;

/// Errors raised by a scoring engine
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScoringError {
    #[error("Not enough responses to score: {0}")]
    InsufficientResponses(String),

    #[error("Scoring failed: {0}")]
    Failed(String),
}

/// Port for turning committed responses into results.
///
/// Must be deterministic for identical responses.
pub trait ScoringEngine: Send + Sync {
    fn score(
        &self,
        responses: &[Response],
        session_id: &SessionId,
    ) -> Result<AssessmentResults, ScoringError>;
}
