//! Assessment domain module.
//!
//! The session aggregate and the values it is built from. A session walks
//! `consent -> demographics -> questionnaire -> processing -> completed`
//! and holds the committed demographics and responses.
//!
//! # Invariant
//!
//! After every committed transition, each response's question id belongs to
//! the valid question set derived from the session's demographics.

mod assessment_type;
mod demographics;
mod events;
mod question_set;
mod response;
mod session;
mod step;

pub use assessment_type::AssessmentType;
pub use demographics::Demographics;
pub use events::SessionEvent;
pub use question_set::{ResponsePartition, ValidQuestionSet};
pub use response::Response;
pub use session::{AssessmentResults, AssessmentSession};
pub use step::AssessmentStep;
