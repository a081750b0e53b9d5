//! AssessmentFlow - the session state machine and its reconciliation engine.
//!
//! One `AssessmentFlow` owns one running session: the current step, the
//! committed demographics and responses, the session record, and whichever
//! confirmation gate is open. Operations are synchronous and run one at a
//! time; the only suspension points are the two gates.
//!
//! The work is split across impl blocks:
//!
//! - this module: construction, accessors, step navigation, completion
//! - `reconciliation`: resume detection, gates, demographics submission
//! - `cleanup`: rewrite store and session after a reconciliation commit
//! - `response_update`: defensive filtering of answer batches
//!
//! # Committed-set invariant
//!
//! Once demographics are committed, every response held by the flow belongs
//! to the valid question set for those demographics. Only `PendingProgress`
//! may break this, and only while a gate is open.

mod cleanup;
mod error;
mod outcomes;
mod reconciliation;
mod response_update;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::FlowError;
pub use outcomes::{
    CompletionOutcome, ConfirmOutcome, DemographicsOutcome, NavigationOutcome, ResponseUpdate,
    ResumeOutcome,
};

use std::sync::Arc;
use std::time::Duration;

use super::QuestionSetResolver;
use crate::domain::assessment::{
    AssessmentSession, AssessmentStep, AssessmentType, Demographics, Response, SessionEvent,
    ValidQuestionSet,
};
use crate::domain::foundation::{
    Percentage, SessionId, StateMachine, Timestamp, ValidationError,
};
use crate::domain::reconciliation::{ConfirmationGate, DismissGuard, PendingProgress};
use crate::ports::{
    ProgressRepository, ScaleDefinitions, ScaleSelector, ScoringEngine, SessionNotifier,
    SessionRepository,
};

/// Collaborators the flow talks to.
#[derive(Clone)]
pub struct FlowDependencies {
    pub selector: Arc<dyn ScaleSelector>,
    pub definitions: Arc<dyn ScaleDefinitions>,
    pub progress: Arc<dyn ProgressRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub scoring: Arc<dyn ScoringEngine>,
    pub notifier: Arc<dyn SessionNotifier>,
}

/// Per-flow settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSettings {
    pub assessment_type: AssessmentType,
    /// Handed to the presentation surface on completion.
    pub completion_delay: Duration,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            assessment_type: AssessmentType::default(),
            completion_delay: Duration::from_millis(2000),
        }
    }
}

/// Drives one assessment from consent to completion.
pub struct AssessmentFlow {
    step: AssessmentStep,
    session: AssessmentSession,
    /// `None` until the user submits or resumes demographics.
    demographics: Option<Demographics>,
    pending: Option<PendingProgress>,
    gate: Option<ConfirmationGate>,
    guard: DismissGuard,
    has_checked_progress: bool,
    resume_token: Option<Timestamp>,
    current_page: usize,
    completion_delay: Duration,

    resolver: QuestionSetResolver,
    progress: Arc<dyn ProgressRepository>,
    sessions: Arc<dyn SessionRepository>,
    scoring: Arc<dyn ScoringEngine>,
    notifier: Arc<dyn SessionNotifier>,
}

impl AssessmentFlow {
    /// Start a fresh session at the consent step.
    pub fn new(deps: FlowDependencies, settings: FlowSettings) -> Self {
        Self::with_session_id(SessionId::new(), deps, settings)
    }

    pub fn with_session_id(id: SessionId, deps: FlowDependencies, settings: FlowSettings) -> Self {
        let resolver =
            QuestionSetResolver::new(deps.selector, deps.definitions, settings.assessment_type);
        Self {
            step: AssessmentStep::Consent,
            session: AssessmentSession::new(id, settings.assessment_type),
            demographics: None,
            pending: None,
            gate: None,
            guard: DismissGuard::default(),
            has_checked_progress: false,
            resume_token: None,
            current_page: 0,
            completion_delay: settings.completion_delay,
            resolver,
            progress: deps.progress,
            sessions: deps.sessions,
            scoring: deps.scoring,
            notifier: deps.notifier,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn assessment_type(&self) -> AssessmentType {
        self.resolver.assessment_type()
    }

    pub fn step(&self) -> AssessmentStep {
        self.step
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn demographics(&self) -> Option<&Demographics> {
        self.demographics.as_ref()
    }

    pub fn responses(&self) -> &[Response] {
        self.session.responses()
    }

    /// Answered-count readout for the questionnaire header.
    pub fn response_count(&self) -> usize {
        self.session.responses().len()
    }

    pub fn step_progress(&self) -> Percentage {
        self.step.progress()
    }

    /// Switches consent wording for the 14-17 bracket.
    pub fn is_minor(&self) -> bool {
        self.demographics.as_ref().is_some_and(Demographics::is_minor)
    }

    pub fn gate(&self) -> Option<&ConfirmationGate> {
        self.gate.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingProgress> {
        self.pending.as_ref()
    }

    /// Changes on every resume or confirm so the questionnaire re-seeks.
    pub fn resume_token(&self) -> Option<&Timestamp> {
        self.resume_token.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn has_checked_progress(&self) -> bool {
        self.has_checked_progress
    }

    /// Valid question set for the committed demographics.
    ///
    /// Empty until demographics are committed.
    pub fn valid_question_set(&self) -> ValidQuestionSet {
        self.demographics
            .as_ref()
            .map(|d| self.resolver.resolve(d))
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Answer the consent form. Declining leaves for the home view.
    pub fn give_consent(&mut self, consented: bool) -> Result<NavigationOutcome, FlowError> {
        self.ensure_no_gate()?;
        if !consented {
            tracing::info!(session_id = %self.session.id(), "Consent declined");
            return Ok(NavigationOutcome::ExitHome);
        }
        self.move_to(AssessmentStep::Demographics)?;
        Ok(NavigationOutcome::Step(self.step))
    }

    /// Explicit back action. Never touches responses.
    pub fn go_back(&mut self) -> Result<NavigationOutcome, FlowError> {
        self.ensure_no_gate()?;
        if !self.step.allows_back() {
            return Err(FlowError::InvalidTransition(ValidationError::invalid_format(
                "state_transition",
                format!("{} has no back transition", self.step),
            )));
        }
        match self.step.previous() {
            Some(previous) => {
                self.move_to(previous)?;
                Ok(NavigationOutcome::Step(self.step))
            }
            None => Ok(NavigationOutcome::ExitHome),
        }
    }

    /// Track the questionnaire page; persisted with the next answer batch.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Score the committed answers and finish the session.
    ///
    /// On scoring failure the flow returns to the questionnaire with every
    /// answer intact and the error is returned for display.
    pub fn complete_questionnaire(&mut self) -> Result<CompletionOutcome, FlowError> {
        self.ensure_no_gate()?;
        if self.demographics.is_none() {
            return Err(FlowError::DemographicsRequired);
        }
        self.move_to(AssessmentStep::Processing)?;

        let scored = self
            .scoring
            .score(self.session.responses(), self.session.id());

        let results = match scored {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(
                    session_id = %self.session.id(),
                    responses = self.response_count(),
                    error = %e,
                    "Scoring failed"
                );
                self.move_to(AssessmentStep::Questionnaire)?;
                self.notify(SessionEvent::ScoringFailed {
                    message: e.to_string(),
                });
                return Err(FlowError::ScoringFailed(e));
            }
        };

        self.session.complete(results.clone());
        self.persist_session();
        if let Err(e) = self.progress.clear() {
            tracing::error!(error = %e, "Failed to erase progress after completion");
        }
        self.move_to(AssessmentStep::Completed)?;

        tracing::info!(
            session_id = %self.session.id(),
            responses = self.response_count(),
            "Assessment completed"
        );
        self.notify(SessionEvent::Completed {
            session_id: *self.session.id(),
            redirect_delay: self.completion_delay,
        });

        Ok(CompletionOutcome {
            session_id: *self.session.id(),
            results,
            redirect_delay: self.completion_delay,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_no_gate(&self) -> Result<(), FlowError> {
        match self.gate {
            Some(_) => Err(FlowError::ConfirmationPending),
            None => Ok(()),
        }
    }

    /// Validated step change.
    fn move_to(&mut self, target: AssessmentStep) -> Result<(), FlowError> {
        let next = self.step.transition_to(target)?;
        self.set_step(next);
        Ok(())
    }

    /// Step change without graph validation, for resume and discard.
    fn jump_to(&mut self, target: AssessmentStep) {
        if self.step != target {
            self.set_step(target);
        }
    }

    fn set_step(&mut self, to: AssessmentStep) {
        let from = self.step;
        self.step = to;
        tracing::debug!(from = %from, to = %to, "Step changed");
        self.notify(SessionEvent::StepChanged { from, to });
    }

    fn open_gate(&mut self, gate: ConfirmationGate) {
        self.gate = Some(gate);
        self.guard.arm();
        self.notify(SessionEvent::GateOpened { gate });
    }

    fn close_gate(&mut self) {
        if self.gate.take().is_some() {
            self.notify(SessionEvent::GateClosed);
        }
    }

    fn persist_session(&self) {
        if let Err(e) = self.sessions.save(&self.session) {
            tracing::error!(session_id = %self.session.id(), error = %e, "Failed to save session");
        }
    }

    fn notify(&self, event: SessionEvent) {
        self.notifier.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn new_flow_starts_at_consent_with_nothing_committed() {
        let fx = Fixture::new();
        let flow = fx.flow();

        assert_eq!(flow.step(), AssessmentStep::Consent);
        assert_eq!(flow.response_count(), 0);
        assert!(flow.demographics().is_none());
        assert!(flow.gate().is_none());
        assert_eq!(flow.step_progress().value(), 25);
    }

    #[test]
    fn declining_consent_exits_without_moving() {
        let fx = Fixture::new();
        let mut flow = fx.flow();

        assert_eq!(flow.give_consent(false).unwrap(), NavigationOutcome::ExitHome);
        assert_eq!(flow.step(), AssessmentStep::Consent);
    }

    #[test]
    fn consent_moves_to_demographics_and_notifies() {
        let fx = Fixture::new();
        let mut flow = fx.flow();

        let outcome = flow.give_consent(true).unwrap();

        assert_eq!(outcome, NavigationOutcome::Step(AssessmentStep::Demographics));
        assert_eq!(fx.notifier.step_changes(), vec![AssessmentStep::Demographics]);
        assert_eq!(flow.step_progress().value(), 50);
    }

    #[test]
    fn back_walks_the_steps_and_exits_from_consent() {
        let fx = Fixture::new();
        let mut flow = fx.flow_at_questionnaire("2", &["A1", "B1"]);

        assert_eq!(
            flow.go_back().unwrap(),
            NavigationOutcome::Step(AssessmentStep::Demographics)
        );
        assert_eq!(flow.go_back().unwrap(), NavigationOutcome::Step(AssessmentStep::Consent));
        assert_eq!(flow.go_back().unwrap(), NavigationOutcome::ExitHome);
        assert_eq!(flow.response_count(), 2);
    }

    #[test]
    fn is_minor_follows_committed_demographics() {
        let fx = Fixture::new();
        assert!(fx.flow_at_questionnaire("0", &[]).is_minor());
        assert!(!fx.flow_at_questionnaire("2", &[]).is_minor());
        assert!(!fx.flow().is_minor());
    }

    #[test]
    fn completion_requires_demographics() {
        let fx = Fixture::new();
        let mut flow = fx.flow();

        let err = flow.complete_questionnaire().unwrap_err();
        assert_eq!(err.code(), ErrorCode::DemographicsRequired);
    }

    #[test]
    fn completion_scores_marks_session_and_erases_progress() {
        let fx = Fixture::new();
        let mut flow = fx.flow_at_questionnaire("2", &["A1", "A2", "B1"]);
        assert!(fx.progress_record().is_some());

        let outcome = flow.complete_questionnaire().unwrap();

        assert_eq!(flow.step(), AssessmentStep::Completed);
        assert_eq!(outcome.session_id, *flow.session().id());
        assert_eq!(outcome.redirect_delay, Duration::from_millis(2000));
        assert_eq!(outcome.results.as_json()["count"], 3);
        assert!(flow.session().is_completed());
        assert!(flow.session().end_time().is_some());
        assert!(fx.progress_record().is_none());
        assert!(fx.stored_session(flow.session().id()).unwrap().is_completed());
    }

    #[test]
    fn scoring_failure_returns_to_questionnaire_keeping_answers() {
        let fx = Fixture::with_failing_scoring();
        let mut flow = fx.flow_at_questionnaire("2", &["A1", "B1"]);

        let err = flow.complete_questionnaire().unwrap_err();

        assert!(matches!(err, FlowError::ScoringFailed(_)));
        assert_eq!(flow.step(), AssessmentStep::Questionnaire);
        assert_eq!(flow.response_count(), 2);
        assert!(!flow.session().is_completed());
        assert!(fx
            .notifier
            .events()
            .iter()
            .any(|e| matches!(e, SessionEvent::ScoringFailed { .. })));
        assert!(fx.progress_record().is_some());
    }

    #[test]
    fn processing_has_no_back_transition() {
        let fx = Fixture::new();
        let mut flow = fx.flow_at_questionnaire("2", &["A1"]);
        flow.step = AssessmentStep::Processing;

        let err = flow.go_back().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        assert_eq!(flow.step(), AssessmentStep::Processing);
    }

    #[test]
    fn page_cursor_is_tracked() {
        let fx = Fixture::new();
        let mut flow = fx.flow();
        flow.set_current_page(4);
        assert_eq!(flow.current_page(), 4);
    }
}
