//! Shared harness for the flow integration tests.
//!
//! Scales: `A` = A1..A5, `B` = B1..B3, `C` = C1..C2.
//! Age bracket `"0"` selects `{A, C}`; any other bracket selects `{A, B}`
//! for quick and `{A, B, C}` for full.

#![allow(dead_code)]

use serde_json::json;
use std::sync::Arc;

use adaptive_assessment::adapters::{
    KvSessionRepository, ProgressStore, RecordingNotifier, ScaleConfigFile, StoredProgress,
};
use adaptive_assessment::application::{AssessmentFlow, FlowDependencies, FlowSettings};
use adaptive_assessment::domain::assessment::{
    AssessmentResults, AssessmentType, Demographics, Response,
};
use adaptive_assessment::domain::foundation::{QuestionId, SessionId, Timestamp};
use adaptive_assessment::ports::{KeyValueStore, ScoringEngine, ScoringError};

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

pub struct SumScoring;

impl ScoringEngine for SumScoring {
    fn score(
        &self,
        responses: &[Response],
        _session_id: &SessionId,
    ) -> Result<AssessmentResults, ScoringError> {
        if responses.is_empty() {
            return Err(ScoringError::InsufficientResponses("no answers".into()));
        }
        let total: i32 = responses.iter().map(Response::value).sum();
        Ok(AssessmentResults::new(json!({ "total": total })))
    }
}

pub struct BrokenScoring;

impl ScoringEngine for BrokenScoring {
    fn score(&self, _: &[Response], _: &SessionId) -> Result<AssessmentResults, ScoringError> {
        Err(ScoringError::Failed("division by zero".into()))
    }
}

pub fn responses(ids: &[&str]) -> Vec<Response> {
    ids.iter()
        .map(|id| Response::new(QuestionId::from(*id), 4))
        .collect()
}

pub fn ids_of(responses: &[Response]) -> Vec<String> {
    responses
        .iter()
        .map(|r| r.question_id().as_str().to_string())
        .collect()
}

/// One device: a key-value store shared by every flow built from it.
pub struct Device {
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: RecordingNotifier,
    scoring: Arc<dyn ScoringEngine>,
}

impl Device {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            notifier: RecordingNotifier::new(),
            scoring: Arc::new(SumScoring),
        }
    }

    pub fn with_scoring(mut self, scoring: Arc<dyn ScoringEngine>) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn progress(&self) -> ProgressStore {
        ProgressStore::new(self.store.clone(), PROGRESS_KEY)
    }

    pub fn sessions(&self) -> KvSessionRepository {
        KvSessionRepository::new(self.store.clone(), SESSION_PREFIX)
    }

    pub fn flow(&self, assessment_type: AssessmentType) -> AssessmentFlow {
        let (catalog, selector) = ScaleConfigFile::from_yaml(SCALES_YAML)
            .and_then(ScaleConfigFile::into_parts)
            .expect("fixture scales parse");
        let deps = FlowDependencies {
            selector: Arc::new(selector),
            definitions: Arc::new(catalog),
            progress: Arc::new(self.progress()),
            sessions: Arc::new(self.sessions()),
            scoring: self.scoring.clone(),
            notifier: Arc::new(self.notifier.clone()),
        };
        AssessmentFlow::new(
            deps,
            FlowSettings {
                assessment_type,
                ..FlowSettings::default()
            },
        )
    }

    /// Quick flow through consent and demographics, then one answer batch.
    pub fn answered_flow(&self, age: &str, ids: &[&str]) -> AssessmentFlow {
        let mut flow = self.flow(AssessmentType::Quick);
        flow.check_saved_progress();
        flow.give_consent(true).expect("consent");
        flow.submit_demographics(Demographics::with_age(age))
            .expect("demographics");
        flow.update_responses(responses(ids)).expect("answers");
        flow
    }

    pub fn seed(&self, assessment_type: AssessmentType, demographics: Option<Demographics>, ids: &[&str]) {
        self.progress()
            .save_record(&StoredProgress {
                assessment_type,
                demographics,
                responses: responses(ids),
                current_page: 1,
                timestamp: Timestamp::now(),
            })
            .expect("seed progress");
    }

    pub fn record(&self) -> Option<StoredProgress> {
        self.progress().load_record()
    }
}
