//! Defensive validation of answer batches from the questionnaire.

use super::{AssessmentFlow, FlowError, ResponseUpdate};
use crate::domain::assessment::{AssessmentStep, Response, SessionEvent};

impl AssessmentFlow {
    /// Commit the questionnaire's full answer list.
    ///
    /// Entries outside the current valid question set are dropped and
    /// logged, never reported as an error. The batch replaces the committed
    /// responses and is written to the progress store with the page cursor.
    /// Batches arriving outside the questionnaire step are refused.
    pub fn update_responses(&mut self, batch: Vec<Response>) -> Result<ResponseUpdate, FlowError> {
        self.ensure_no_gate()?;
        let demographics = self
            .demographics
            .as_ref()
            .ok_or(FlowError::DemographicsRequired)?;
        if self.step != AssessmentStep::Questionnaire {
            tracing::warn!(step = %self.step, "Refused answers outside the questionnaire");
            return Err(FlowError::AnswersNotAccepted(self.step));
        }

        let partition = self.resolver.resolve(demographics).partition(&batch);
        let update = ResponseUpdate {
            committed: partition.kept.len(),
            dropped: partition.discarded_count(),
        };
        if update.dropped > 0 {
            let dropped_ids: Vec<&str> = partition
                .discarded
                .iter()
                .map(|r| r.question_id().as_str())
                .collect();
            tracing::warn!(
                dropped = update.dropped,
                ids = ?dropped_ids,
                "Dropped answers outside the valid question set"
            );
        }

        self.session.replace_responses(partition.kept);
        self.persist_session();
        self.write_progress();
        self.notify(SessionEvent::ResponsesCommitted {
            count: update.committed,
        });
        Ok(update)
    }
}
