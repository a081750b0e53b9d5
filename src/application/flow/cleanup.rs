//! Cleanup after a reconciliation commit.

use super::AssessmentFlow;

impl AssessmentFlow {
    /// Bring the progress store and the session record in line with the
    /// committed demographics and responses.
    ///
    /// An empty response set erases the progress entry rather than writing
    /// an empty record. The page cursor restarts at zero and the session is
    /// marked in progress again. Idempotent apart from the record timestamp.
    pub fn cleanup_orphan_data(&mut self) {
        let demographics = self
            .demographics
            .clone()
            .unwrap_or_else(|| self.session.demographics().clone());
        let responses = self.session.responses().to_vec();

        self.session.reconcile(demographics, responses);
        self.current_page = 0;

        self.write_progress();
        self.persist_session();
    }

    /// Save the committed state with the current page, or erase the entry
    /// when nothing is answered. Failures are logged only.
    pub(super) fn write_progress(&self) {
        let retained = self.session.responses().len();
        let written = if retained == 0 {
            self.progress.clear()
        } else {
            self.progress.save(&self.session, self.current_page)
        };
        match written {
            Ok(()) => tracing::debug!(retained, page = self.current_page, "Progress saved"),
            Err(e) => tracing::error!(retained, error = %e, "Failed to write saved progress"),
        }
    }
}
