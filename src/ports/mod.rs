//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the assessment engine and the outside world. Adapters implement them.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Synchronous device-scoped key-value storage
//! - `ProgressRepository` - The resumable progress record
//! - `SessionRepository` - Persistence of the session record
//!
//! ## Collaborator Ports
//!
//! - `ScaleSelector` - Demographics to ordered scale ids
//! - `ScaleDefinitions` - Scale id to question list
//! - `ScoringEngine` - Opaque deterministic scoring
//! - `SessionNotifier` - Step, gate, and completion notifications

mod key_value_store;
mod progress_repository;
mod scale_selector;
mod scoring_engine;
mod session_notifier;
mod session_repository;

pub use key_value_store::{KeyValueStore, StoreError};
pub use progress_repository::ProgressRepository;
pub use scale_selector::{ScaleDefinitions, ScaleSelector};
pub use scoring_engine::{ScoringEngine, ScoringError};
pub use session_notifier::SessionNotifier;
pub use session_repository::SessionRepository;
