//! ValidQuestionSet - the question ids acceptable for the current demographics.
//!
//! Derived on demand and never persisted.

use std::collections::HashSet;

use super::Response;
use crate::domain::foundation::QuestionId;

/// Unordered, deduplicated set of acceptable question ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidQuestionSet {
    ids: HashSet<QuestionId>,
}

/// Responses split into those that survive a filter and the orphans it drops.
///
/// Both halves keep the original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePartition {
    pub kept: Vec<Response>,
    pub discarded: Vec<Response>,
}

impl ResponsePartition {
    /// Number of responses the filter would drop.
    pub fn discarded_count(&self) -> usize {
        self.discarded.len()
    }

    /// Size of the input before filtering.
    pub fn total_count(&self) -> usize {
        self.kept.len() + self.discarded.len()
    }

    /// True when nothing would be lost.
    pub fn is_lossless(&self) -> bool {
        self.discarded.is_empty()
    }
}

impl ValidQuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionId> {
        self.ids.iter()
    }

    /// True when every response refers to a question in this set.
    pub fn admits_all(&self, responses: &[Response]) -> bool {
        responses.iter().all(|r| self.contains(r.question_id()))
    }

    /// Split responses into kept and discarded, without mutating the input.
    pub fn partition(&self, responses: &[Response]) -> ResponsePartition {
        let (kept, discarded) = responses
            .iter()
            .cloned()
            .partition(|r| self.contains(r.question_id()));
        ResponsePartition { kept, discarded }
    }
}

impl FromIterator<QuestionId> for ValidQuestionSet {
    fn from_iter<I: IntoIterator<Item = QuestionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<QuestionId> for ValidQuestionSet {
    fn extend<I: IntoIterator<Item = QuestionId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
