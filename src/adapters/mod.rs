//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Key-value stores, the progress store, and session persistence
//! - `scales` - YAML scale catalog and table-driven scale selection
//! - `notify` - Session notifiers (tracing, recording)

pub mod notify;
pub mod scales;
pub mod storage;

pub use notify::{RecordingNotifier, TracingNotifier};
pub use scales::{CatalogError, ScaleConfigFile, ScaleSets, SelectionRule, TableScaleSelector};
pub use storage::{
    FileKeyValueStore, InMemoryKeyValueStore, KvSessionRepository, ProgressStore, StoredProgress,
};
