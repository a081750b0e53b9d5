//! Application layer - the assessment flow and its reconciliation logic.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `AssessmentFlow` is the single owner of a running session.

pub mod flow;
pub mod question_set_resolver;

pub use flow::{
    AssessmentFlow, CompletionOutcome, ConfirmOutcome, DemographicsOutcome, FlowDependencies,
    FlowError, FlowSettings, NavigationOutcome, ResponseUpdate, ResumeOutcome,
};
pub use question_set_resolver::QuestionSetResolver;
