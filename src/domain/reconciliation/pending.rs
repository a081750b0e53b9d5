//! PendingProgress - a candidate state awaiting user confirmation.

use crate::domain::assessment::{Demographics, Response};

/// Where a pending candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSource {
    /// Loaded from the progress store on first mount.
    Resume,
    /// Proposed by a demographics submission over existing answers.
    DemographicEdit,
}

/// Candidate demographics and responses, not yet committed.
///
/// Responses here may reference questions outside the valid set; that is
/// the only place the committed-set invariant is allowed to be broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingProgress {
    pub source: PendingSource,
    pub demographics: Option<Demographics>,
    pub responses: Vec<Response>,
}

impl PendingProgress {
    pub fn resumed(demographics: Option<Demographics>, responses: Vec<Response>) -> Self {
        Self {
            source: PendingSource::Resume,
            demographics,
            responses,
        }
    }

    pub fn demographic_edit(demographics: Demographics, responses: Vec<Response>) -> Self {
        Self {
            source: PendingSource::DemographicEdit,
            demographics: Some(demographics),
            responses,
        }
    }

    /// True when the record carries nothing worth resuming.
    pub fn is_empty(&self) -> bool {
        self.demographics.is_none() && self.responses.is_empty()
    }
}
