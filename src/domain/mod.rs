//! Domain layer containing assessment types and pure rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine trait)
//! - `assessment` - Session aggregate, steps, demographics, responses, question sets
//! - `scales` - Scale definitions consumed by the question-set resolver
//! - `reconciliation` - Pending progress, confirmation gates, and the dismissal guard

pub mod assessment;
pub mod foundation;
pub mod reconciliation;
pub mod scales;
