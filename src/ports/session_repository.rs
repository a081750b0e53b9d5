//! SessionRepository Port - persistence of the session record.

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::SessionId;

use super::StoreError;

/// Port for saving and loading session records
pub trait SessionRepository: Send + Sync {
    /// Save the session, replacing any previous record with the same id.
    fn save(&self, session: &AssessmentSession) -> Result<(), StoreError>;

    /// Load a session by id. Unreadable records are reported as absent.
    fn find_by_id(&self, id: &SessionId) -> Result<Option<AssessmentSession>, StoreError>;
}
