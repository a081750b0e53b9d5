//! Shared fixtures for flow tests.
//!
//! Scales: `A` = A1..A5, `B` = B1..B3, `C` = C1..C2. Age bracket `"0"`
//! selects `{A, C}`; every other bracket selects `{A, B}` (quick).

use serde_json::json;
use std::sync::Arc;

use super::{AssessmentFlow, FlowDependencies, FlowSettings};
use crate::adapters::{
    InMemoryKeyValueStore, KvSessionRepository, ProgressStore, RecordingNotifier,
    ScaleConfigFile, StoredProgress,
};
use crate::domain::assessment::{
    AssessmentResults, AssessmentSession, AssessmentType, Demographics, Response,
};
use crate::domain::foundation::{QuestionId, SessionId, Timestamp};
use crate::ports::{ScoringEngine, ScoringError, SessionRepository};

pub const PROGRESS_KEY: &str = "sri_assessment_progress";
pub const SESSION_PREFIX: &str = "sri_assessment_session_";

pub const SCALES_YAML: &str = r#"
scales:
  - id: A
    questions: [{id: A1}, {id: A2}, {id: A3}, {id: A4}, {id: A5}]
  - id: B
    questions: [{id: B1}, {id: B2}, {id: B3}]
  - id: C
    questions: [{id: C1}, {id: C2}]
selection:
  rules:
    - when: { age: "0" }
      quick: [A, C]
      full: [A, C]
  default:
    quick: [A, B]
    full: [A, B, C]
"#;

/// Counts responses; refuses an empty set.
pub struct CountingScoring;

impl ScoringEngine for CountingScoring {
    fn score(
        &self,
        responses: &[Response],
        session_id: &SessionId,
    ) -> Result<AssessmentResults, ScoringError> {
        if responses.is_empty() {
            return Err(ScoringError::InsufficientResponses("no answers".into()));
        }
        Ok(AssessmentResults::new(json!({
            "sessionId": session_id.to_string(),
            "count": responses.len(),
        })))
    }
}

pub struct FailingScoring;

impl ScoringEngine for FailingScoring {
    fn score(&self, _: &[Response], _: &SessionId) -> Result<AssessmentResults, ScoringError> {
        Err(ScoringError::Failed("engine unavailable".into()))
    }
}

pub fn responses(ids: &[&str]) -> Vec<Response> {
    ids.iter()
        .map(|id| Response::new(QuestionId::from(*id), 3))
        .collect()
}

pub fn ids_of(responses: &[Response]) -> Vec<String> {
    responses
        .iter()
        .map(|r| r.question_id().as_str().to_string())
        .collect()
}

pub struct Fixture {
    pub kv: InMemoryKeyValueStore,
    pub notifier: RecordingNotifier,
    pub progress: ProgressStore,
    pub sessions: KvSessionRepository,
    scoring: Arc<dyn ScoringEngine>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::build(InMemoryKeyValueStore::new(), Arc::new(CountingScoring))
    }

    pub fn with_failing_scoring() -> Self {
        Self::build(InMemoryKeyValueStore::new(), Arc::new(FailingScoring))
    }

    pub fn with_failing_store() -> Self {
        Self::build(InMemoryKeyValueStore::failing_writes(), Arc::new(CountingScoring))
    }

    fn build(kv: InMemoryKeyValueStore, scoring: Arc<dyn ScoringEngine>) -> Self {
        let store = Arc::new(kv.clone());
        Self {
            progress: ProgressStore::new(store.clone(), PROGRESS_KEY),
            sessions: KvSessionRepository::new(store, SESSION_PREFIX),
            kv,
            notifier: RecordingNotifier::new(),
            scoring,
        }
    }

    pub fn deps(&self) -> FlowDependencies {
        let (catalog, selector) = ScaleConfigFile::from_yaml(SCALES_YAML)
            .and_then(ScaleConfigFile::into_parts)
            .unwrap();
        FlowDependencies {
            selector: Arc::new(selector),
            definitions: Arc::new(catalog),
            progress: Arc::new(self.progress.clone()),
            sessions: Arc::new(self.sessions.clone()),
            scoring: self.scoring.clone(),
            notifier: Arc::new(self.notifier.clone()),
        }
    }

    pub fn flow(&self) -> AssessmentFlow {
        self.flow_of(AssessmentType::Quick)
    }

    pub fn flow_of(&self, assessment_type: AssessmentType) -> AssessmentFlow {
        AssessmentFlow::new(
            self.deps(),
            FlowSettings {
                assessment_type,
                ..FlowSettings::default()
            },
        )
    }

    /// A quick flow past consent and demographics with the given answers.
    pub fn flow_at_questionnaire(&self, age: &str, ids: &[&str]) -> AssessmentFlow {
        let mut flow = self.flow();
        flow.check_saved_progress();
        flow.give_consent(true).unwrap();
        flow.submit_demographics(Demographics::with_age(age)).unwrap();
        if !ids.is_empty() {
            flow.update_responses(responses(ids)).unwrap();
        }
        flow
    }

    /// Write a progress record as an earlier visit would have left it.
    pub fn seed_progress(
        &self,
        assessment_type: AssessmentType,
        demographics: Option<Demographics>,
        ids: &[&str],
    ) {
        self.progress
            .save_record(&StoredProgress {
                assessment_type,
                demographics,
                responses: responses(ids),
                current_page: 2,
                timestamp: Timestamp::now(),
            })
            .unwrap();
    }

    pub fn progress_record(&self) -> Option<StoredProgress> {
        self.progress.load_record()
    }

    pub fn stored_session(&self, id: &SessionId) -> Option<AssessmentSession> {
        self.sessions.find_by_id(id).unwrap()
    }
}
