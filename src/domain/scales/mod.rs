//! Scale definitions.
//!
//! A scale is a named psychometric instrument: an ordered list of questions.
//! The catalog maps scale ids to definitions for the question-set resolver.

mod catalog;
mod definition;

pub use catalog::ScaleCatalog;
pub use definition::{QuestionDefinition, ScaleDefinition};
