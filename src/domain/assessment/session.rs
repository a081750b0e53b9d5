//! AssessmentSession aggregate.
//!
//! The session record is owned by the assessment flow for its whole lifetime
//! and persisted after every committed mutation. Responses are replaced as a
//! whole sequence, never edited one by one.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{AssessmentType, Demographics, Response};
use crate::domain::foundation::{SessionId, Timestamp};

/// Opaque scoring output. The engine stores it but never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentResults(JsonValue);

impl AssessmentResults {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }
}

/// Session aggregate - one run through the assessment.
///
/// # Invariants
///
/// - `completed` implies `end_time` and `results` are set
/// - a reconciled session is never completed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSession {
    id: SessionId,

    #[serde(rename = "type")]
    assessment_type: AssessmentType,

    demographics: Demographics,

    responses: Vec<Response>,

    start_time: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<Timestamp>,

    completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    results: Option<AssessmentResults>,
}

impl AssessmentSession {
    /// Create a fresh session with empty demographics and no responses.
    pub fn new(id: SessionId, assessment_type: AssessmentType) -> Self {
        Self {
            id,
            assessment_type,
            demographics: Demographics::default(),
            responses: Vec::new(),
            start_time: Timestamp::now(),
            end_time: None,
            completed: false,
            results: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    pub fn end_time(&self) -> Option<&Timestamp> {
        self.end_time.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the demographics, leaving responses untouched.
    pub fn set_demographics(&mut self, demographics: Demographics) {
        self.demographics = demographics;
    }

    /// Replace the response sequence wholesale.
    pub fn replace_responses(&mut self, responses: Vec<Response>) {
        self.responses = responses;
    }

    /// Overwrite demographics and responses after reconciliation.
    ///
    /// Clears the terminal markers: a reconciled session is in progress again.
    pub fn reconcile(&mut self, demographics: Demographics, responses: Vec<Response>) {
        self.demographics = demographics;
        self.responses = responses;
        self.completed = false;
        self.end_time = None;
    }

    /// Return to the freshly-initialized state, keeping id and type.
    pub fn reset(&mut self) {
        self.demographics = Demographics::default();
        self.responses.clear();
        self.start_time = Timestamp::now();
        self.end_time = None;
        self.completed = false;
        self.results = None;
    }

    /// Mark the session completed with its scoring output.
    pub fn complete(&mut self, results: AssessmentResults) {
        self.results = Some(results);
        self.end_time = Some(Timestamp::now());
        self.completed = true;
    }
}
