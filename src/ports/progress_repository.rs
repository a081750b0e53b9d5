//! ProgressRepository Port - the resumable progress record.

use crate::domain::assessment::{AssessmentSession, AssessmentType};
use crate::domain::reconciliation::PendingProgress;

use super::StoreError;

/// Port for the single device-scoped progress record.
pub trait ProgressRepository: Send + Sync {
    /// Load a resume candidate for the active assessment type.
    ///
    /// Missing, malformed, or other-type records are reported as `None`;
    /// this never fails.
    fn load(&self, assessment_type: AssessmentType) -> Option<PendingProgress>;

    /// Replace the record with the session's committed state and page cursor.
    fn save(&self, session: &AssessmentSession, current_page: usize) -> Result<(), StoreError>;

    /// Erase the record entirely.
    fn clear(&self) -> Result<(), StoreError>;
}
