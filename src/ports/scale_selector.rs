//! Scale Selection Ports - which scales apply, and what they contain.

use crate::domain::assessment::{AssessmentType, Demographics};
use crate::domain::foundation::ScaleId;
use crate::domain::scales::ScaleDefinition;

/// Picks the scales for a respondent.
///
/// Implementations must be pure and total: the same input always yields the
/// same ordered sequence, and no input fails.
pub trait ScaleSelector: Send + Sync {
    fn select(&self, demographics: &Demographics, assessment_type: AssessmentType) -> Vec<ScaleId>;
}

/// Looks up a scale's definition by id.
pub trait ScaleDefinitions: Send + Sync {
    /// Returns `None` for ids the catalog does not know.
    fn scale(&self, id: &ScaleId) -> Option<&ScaleDefinition>;
}
