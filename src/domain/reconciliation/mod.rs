//! Reconciliation value types.
//!
//! When a resumed record or a demographic edit would change which questions
//! are valid, the candidate state is staged as `PendingProgress` and the user
//! is asked through a `ConfirmationGate` before anything is committed.

mod gate;
mod pending;

pub use gate::{ConfirmationGate, DataChangePrompt, DismissDecision, DismissGuard, ResumePrompt};
pub use pending::{PendingProgress, PendingSource};
