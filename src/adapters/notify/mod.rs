//! Notifier Adapters
//!
//! - **TracingNotifier** - Logs every notification at debug level
//! - **RecordingNotifier** - Keeps notifications in memory (testing)

mod recording;
mod tracing_notifier;

pub use recording::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
