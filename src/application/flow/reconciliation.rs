//! Resume detection, the two confirmation gates, and demographics edits.

use super::{AssessmentFlow, ConfirmOutcome, DemographicsOutcome, FlowError, ResumeOutcome};
use crate::domain::assessment::{AssessmentStep, Demographics};
use crate::domain::foundation::{StateMachine, Timestamp};
use crate::domain::reconciliation::{
    ConfirmationGate, DataChangePrompt, DismissDecision, PendingProgress, ResumePrompt,
};

impl AssessmentFlow {
    /// Look for unfinished progress once per flow.
    ///
    /// Opens the resume gate when a usable record of the active type exists.
    /// Later calls return `None` without touching the store, as does a first
    /// call made while a confirmation is already open.
    pub fn check_saved_progress(&mut self) -> Option<ResumePrompt> {
        if self.has_checked_progress {
            return None;
        }
        self.has_checked_progress = true;
        if self.gate.is_some() {
            tracing::debug!("Skipping progress check while a confirmation is open");
            return None;
        }

        let candidate = self
            .progress
            .load(self.assessment_type())
            .filter(|pending| !pending.is_empty())?;

        let prompt = ResumePrompt {
            answered_count: candidate.responses.len(),
        };
        tracing::info!(
            answered = prompt.answered_count,
            has_demographics = candidate.demographics.is_some(),
            "Found unfinished progress"
        );

        self.pending = Some(candidate);
        self.open_gate(ConfirmationGate::Resume(prompt));
        Some(prompt)
    }

    /// "Continue" on the resume gate.
    ///
    /// Commits the stored answers when none are lost under the stored
    /// demographics. Otherwise swaps in the data-change gate and commits
    /// nothing.
    pub fn continue_progress(&mut self) -> Result<ResumeOutcome, FlowError> {
        if !matches!(self.gate, Some(ConfirmationGate::Resume(_))) {
            return Err(FlowError::GateNotOpen("resume"));
        }
        let pending = self.pending.take().ok_or(FlowError::NoPendingProgress)?;
        self.guard.consume();

        let Some(demographics) = pending.demographics.clone() else {
            // Nothing to validate against yet; the demographics submission
            // reconciles these answers.
            let restored = pending.responses.len();
            self.session.replace_responses(pending.responses);
            self.persist_session();
            return Ok(self.finish_resume(restored, AssessmentStep::Demographics));
        };

        let partition = self.resolver.resolve(&demographics).partition(&pending.responses);
        if !partition.is_lossless() {
            let prompt = DataChangePrompt {
                discarded_count: partition.discarded_count(),
                total_count: partition.total_count(),
            };
            tracing::warn!(
                discarded = prompt.discarded_count,
                total = prompt.total_count,
                "Stored answers no longer match the question set"
            );
            self.pending = Some(pending);
            self.open_gate(ConfirmationGate::DataChange(prompt));
            return Ok(ResumeOutcome::DataChangeRequired(prompt));
        }

        let restored = partition.kept.len();
        self.session.reconcile(demographics.clone(), partition.kept);
        self.demographics = Some(demographics);
        self.persist_session();
        if restored == 0 {
            // A record with demographics only must not outlive the resume.
            self.write_progress();
        }
        Ok(self.finish_resume(restored, AssessmentStep::Questionnaire))
    }

    fn finish_resume(&mut self, restored: usize, step: AssessmentStep) -> ResumeOutcome {
        self.close_gate();
        self.jump_to(step);
        self.resume_token = Some(Timestamp::now());
        tracing::info!(restored, step = %step, "Resumed saved progress");
        ResumeOutcome::Resumed { restored, step }
    }

    /// "Discard" on the resume gate, and the restart path.
    ///
    /// Erases the progress entry, resets the session to a fresh state and
    /// persists it so no stale record survives.
    pub fn discard_progress(&mut self) {
        self.guard.consume();

        if let Err(e) = self.progress.clear() {
            tracing::error!(error = %e, "Failed to erase saved progress");
        }

        self.pending = None;
        self.has_checked_progress = true;
        self.demographics = None;
        self.resume_token = None;
        self.current_page = 0;
        self.session.reset();
        self.persist_session();

        self.close_gate();
        self.jump_to(AssessmentStep::Consent);
        tracing::info!(session_id = %self.session.id(), "Discarded saved progress");
    }

    /// Submit the demographics form.
    ///
    /// With existing answers and a changed scale set, answers that would be
    /// dropped are held back behind the data-change gate instead.
    pub fn submit_demographics(
        &mut self,
        demographics: Demographics,
    ) -> Result<DemographicsOutcome, FlowError> {
        self.ensure_no_gate()?;
        let target = self.step.transition_to(AssessmentStep::Questionnaire)?;

        let has_answers = !self.session.responses().is_empty();
        if has_answers && self.scales_changed(&demographics) {
            let partition = self
                .resolver
                .resolve(&demographics)
                .partition(self.session.responses());

            if !partition.is_lossless() {
                let prompt = DataChangePrompt {
                    discarded_count: partition.discarded_count(),
                    total_count: partition.total_count(),
                };
                tracing::warn!(
                    discarded = prompt.discarded_count,
                    total = prompt.total_count,
                    "Demographics change would drop answers"
                );
                self.pending = Some(PendingProgress::demographic_edit(
                    demographics,
                    self.session.responses().to_vec(),
                ));
                self.open_gate(ConfirmationGate::DataChange(prompt));
                return Ok(DemographicsOutcome::ConfirmationRequired(prompt));
            }
        }

        self.session.set_demographics(demographics.clone());
        self.demographics = Some(demographics);
        self.persist_session();
        if has_answers {
            self.cleanup_orphan_data();
        }

        self.set_step(target);
        Ok(DemographicsOutcome::Committed)
    }

    fn scales_changed(&self, new: &Demographics) -> bool {
        match &self.demographics {
            Some(old) => self.resolver.scales_changed(old, new),
            None => true,
        }
    }

    /// "Confirm" on the data-change gate.
    ///
    /// Re-filters the staged answers against the staged demographics,
    /// commits the survivors, and runs cleanup.
    pub fn confirm_data_change(&mut self) -> Result<ConfirmOutcome, FlowError> {
        if !matches!(self.gate, Some(ConfirmationGate::DataChange(_))) {
            return Err(FlowError::GateNotOpen("data change"));
        }
        let pending = self.pending.take().ok_or(FlowError::NoPendingProgress)?;
        self.guard.consume();

        let source = pending.source;
        let demographics = pending
            .demographics
            .or_else(|| self.demographics.clone())
            .unwrap_or_default();
        let partition = self.resolver.resolve(&demographics).partition(&pending.responses);
        let outcome = ConfirmOutcome {
            kept: partition.kept.len(),
            discarded: partition.discarded_count(),
        };

        self.session.reconcile(demographics.clone(), partition.kept);
        self.demographics = Some(demographics);
        self.cleanup_orphan_data();

        self.close_gate();
        self.jump_to(AssessmentStep::Questionnaire);
        self.resume_token = Some(Timestamp::now());
        tracing::info!(
            source = ?source,
            kept = outcome.kept,
            discarded = outcome.discarded,
            "Confirmed data change"
        );
        Ok(outcome)
    }

    /// "Restart" on the data-change gate. Takes the discard path.
    pub fn restart_from_data_change(&mut self) -> Result<(), FlowError> {
        if !matches!(self.gate, Some(ConfirmationGate::DataChange(_))) {
            return Err(FlowError::GateNotOpen("data change"));
        }
        self.discard_progress();
        Ok(())
    }

    /// Close request raised by the dialog surface itself.
    ///
    /// A close following an explicit resolution is accepted and re-arms the
    /// guard. An implicit dismissal is refused while a candidate is pending.
    pub fn on_gate_dismiss_requested(&mut self) -> DismissDecision {
        let decision = self.guard.on_dismiss_requested(self.pending.is_some());
        match decision {
            DismissDecision::Close => {
                self.guard.arm();
                self.close_gate();
            }
            DismissDecision::KeepOpen => {
                tracing::debug!("Ignoring dialog dismissal while a decision is pending");
            }
        }
        decision
    }
}
