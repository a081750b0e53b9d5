//! SessionNotifier Port - outbound notifications to presentation surfaces.

use crate::domain::assessment::SessionEvent;

/// Port for delivering flow notifications.
///
/// Delivery is fire-and-forget; the flow never waits on or fails because of
/// a notifier.
pub trait SessionNotifier: Send + Sync {
    fn notify(&self, event: &SessionEvent);
}
