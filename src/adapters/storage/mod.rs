//! Storage Adapters
//!
//! Implementations of the KeyValueStore and SessionRepository ports, plus the
//! progress store that keeps the resumable record.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One file per key, replaced atomically
//! - **InMemoryKeyValueStore** - In-process map (testing/development)
//! - **ProgressStore** - Typed, fail-closed access to the progress record
//! - **KvSessionRepository** - Session records as JSON values
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, ProgressStore};
//!
//! let store = Arc::new(FileKeyValueStore::new("./data"));
//! let progress = ProgressStore::new(store, "sri_assessment_progress");
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;
mod progress_store;
mod session_repository;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use progress_store::{ProgressStore, StoredProgress};
pub use session_repository::KvSessionRepository;
