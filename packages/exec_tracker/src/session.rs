//! The scoped guard during which tracking is active.

use crate::Tracker;

/// Guard for an active tracking session.
///
/// Created by [`Tracker::session`]; tracking stays active for exactly as long
/// as the guard lives. Dropping it deactivates tracking unconditionally, on
/// every exit path from the scope - panics included - and never suppresses or
/// transforms a propagating panic.
///
/// # Examples
///
/// ```
/// use exec_tracker::{Metrics, Tracker};
///
/// let tracker = Tracker::new();
///
/// {
///     let session = tracker.session();
///     assert!(session.tracker().is_tracking());
///     tracker.update_and_record(Metrics::new().with("executions", 1));
/// }
///
/// // The guard has dropped; the device no longer records anything.
/// assert!(!tracker.is_tracking());
/// ```
#[derive(Debug)]
#[must_use = "tracking stops when the session guard is dropped"]
pub struct Session {
    tracker: Tracker,
}

impl Session {
    pub(crate) fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// The tracker this session belongs to, for referencing it within the
    /// scope.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.tracker.set_tracking(false);
    }
}
