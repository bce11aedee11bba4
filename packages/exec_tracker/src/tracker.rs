//! The tracker itself: shared handle, update/record protocol, sessions.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::accumulator::Accumulator;
use crate::timing::UpdateTimer;
use crate::{ERR_POISONED_LOCK, Metrics, Report, Session, TrackerBuilder};

/// The external reporter invoked per recorded unit of work.
pub(crate) type Callback = Box<dyn FnMut(&Report) + Send>;

/// Accumulates metrics for every unit of work a device performs while
/// tracking is active.
///
/// A `Tracker` is a shared handle: clones observe and mutate the same state,
/// which is how the handle attached to a device and the handle held by the
/// caller stay in sync. All operations take the tracker's single lock, so a
/// concurrent [`record`](Self::record) never observes a partially applied
/// [`update`](Self::update).
///
/// Wrap device work in a [`session`](Self::session) to activate tracking; the
/// device calls [`update_and_record`](Self::update_and_record) once per unit
/// of work while the session is live.
///
/// # Examples
///
/// ```
/// use exec_tracker::{MetricTotal, Metrics, Tracker};
///
/// let tracker = Tracker::new();
///
/// {
///     let _session = tracker.session();
///     tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 10));
///     tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 20));
/// }
///
/// let report = tracker.to_report();
/// assert_eq!(report.total("executions"), Some(MetricTotal::Int(2)));
/// assert_eq!(report.total("shots"), Some(MetricTotal::Int(30)));
/// ```
#[derive(Clone, Debug)]
pub struct Tracker {
    state: Arc<Mutex<TrackerState>>,
}

pub(crate) struct TrackerState {
    accumulator: Accumulator,
    tracking: bool,
    persistent: bool,
    timer: Option<UpdateTimer>,
    callback: Option<Callback>,
}

impl Tracker {
    /// Creates a tracker with default configuration: not persistent (session
    /// entry resets accumulated data), no timing, reporting to stdout.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default tracker' that is not actually a default tracker"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a tracker with non-default configuration.
    #[must_use]
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    /// Starts building a tracker that measures time with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that doesn't rely on the real one.
    #[cfg(test)]
    pub(crate) fn builder_with_platform(platform: crate::pal::PlatformFacade) -> TrackerBuilder {
        TrackerBuilder::with_platform(platform)
    }

    pub(crate) fn from_parts(
        persistent: bool,
        timer: Option<UpdateTimer>,
        callback: Option<Callback>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(TrackerState {
                accumulator: Accumulator::default(),
                tracking: false,
                persistent,
                timer,
                callback,
            })),
        }
    }

    /// Records one update of metric values.
    ///
    /// Each value is appended to its metric's history and becomes the
    /// metric's latest value; numeric values are additionally summed into the
    /// metric's running total. Non-numeric values (`Null`, `Text`) are kept
    /// out of totals rather than rejected. Metric names are free-form; the
    /// tracker imposes no schema.
    pub fn update(&self, metrics: Metrics) {
        self.state.lock().expect(ERR_POISONED_LOCK).update(metrics);
    }

    /// Reports the current accumulated state without mutating it.
    ///
    /// With a callback configured, invokes it with a detached [`Report`]
    /// snapshot; otherwise prints the report line to stdout. A panic from the
    /// callback propagates to the caller unchanged.
    pub fn record(&self) {
        self.state.lock().expect(ERR_POISONED_LOCK).record();
    }

    /// Applies one update and reports the result, as one atomic unit.
    ///
    /// This is the primary entry point a device calls per unit of work. The
    /// lock is held across both steps, so the report always reflects exactly
    /// the state this update produced.
    pub fn update_and_record(&self, metrics: Metrics) {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);
        state.update(metrics);
        state.record();
    }

    /// Discards all accumulated totals, history and latest values.
    ///
    /// Configuration (`persistent`, callback, timing) and the `tracking` flag
    /// are untouched. With timing enabled, the reference timestamp restarts
    /// so the first post-reset `time` measurement is small and meaningful.
    pub fn reset(&self) {
        self.state.lock().expect(ERR_POISONED_LOCK).reset();
    }

    /// Enters a tracking session, returning the guard that ends it.
    ///
    /// Unless the tracker is persistent, entry resets accumulated data first.
    /// Tracking stays active until the guard drops, on every exit path from
    /// the scope, panics included. Sessions do not nest meaningfully:
    /// dropping any guard deactivates tracking for all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use exec_tracker::Tracker;
    ///
    /// let tracker = Tracker::new();
    /// assert!(!tracker.is_tracking());
    ///
    /// {
    ///     let _session = tracker.session();
    ///     assert!(tracker.is_tracking());
    /// }
    ///
    /// assert!(!tracker.is_tracking());
    /// ```
    pub fn session(&self) -> Session {
        {
            let mut state = self.state.lock().expect(ERR_POISONED_LOCK);
            if !state.persistent {
                state.reset();
            }
            state.tracking = true;
        }

        Session::new(self.clone())
    }

    /// Whether a session is active (or tracking was enabled explicitly).
    ///
    /// Devices consult this before driving the tracker, so work performed
    /// outside a session records nothing.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.lock().expect(ERR_POISONED_LOCK).tracking
    }

    /// Enables or disables tracking directly, without a session.
    ///
    /// For collaborators that need finer gating than a scope provides, e.g.
    /// suspending tracking between two phases of one session.
    pub fn set_tracking(&self, tracking: bool) {
        self.state.lock().expect(ERR_POISONED_LOCK).tracking = tracking;
    }

    /// Whether no update has been recorded since construction or the last
    /// reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .accumulator
            .is_empty()
    }

    /// Creates a detached snapshot of the current accumulated state.
    ///
    /// The snapshot shares nothing with the live tracker and can be inspected
    /// or sent to other threads while tracking continues.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_accumulator(&self.state.lock().expect(ERR_POISONED_LOCK).accumulator)
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Report's Display implementation for consistency.
        write!(f, "{}", self.to_report())
    }
}

impl TrackerState {
    fn update(&mut self, mut metrics: Metrics) {
        if let Some(timer) = &mut self.timer {
            timer.inject(&mut metrics);
        }

        self.accumulator.apply(metrics);
    }

    fn record(&mut self) {
        let report = Report::from_accumulator(&self.accumulator);

        if let Some(callback) = &mut self.callback {
            callback(&report);
        } else {
            report.print_to_stdout();
        }
    }

    fn reset(&mut self) {
        self.accumulator.clear();

        if let Some(timer) = &mut self.timer {
            timer.restart();
        }
    }
}

impl fmt::Debug for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerState")
            .field("accumulator", &self.accumulator)
            .field("tracking", &self.tracking)
            .field("persistent", &self.persistent)
            .field("timer", &self.timer)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::pal::{FakePlatform, PlatformFacade};
    use crate::{MetricTotal, MetricValue};

    /// Collects every report a callback receives, for later inspection.
    fn collecting_callback() -> (Arc<Mutex<Vec<Report>>>, Callback) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        let callback = Box::new(move |report: &Report| {
            sink.lock().unwrap().push(report.clone());
        });

        (received, callback)
    }

    fn tracker_with_callback() -> (Tracker, Arc<Mutex<Vec<Report>>>) {
        let (received, callback) = collecting_callback();
        let tracker = Tracker::builder().callback(callback).build();
        (tracker, received)
    }

    #[test]
    fn fresh_tracker_is_idle_and_empty() {
        let tracker = Tracker::new();

        assert!(!tracker.is_tracking());
        assert!(tracker.is_empty());
        assert!(tracker.to_report().is_empty());
    }

    #[test]
    fn repeated_single_metric_updates() {
        let tracker = Tracker::new();
        tracker.update(Metrics::new().with("executions", 1));
        tracker.update(Metrics::new().with("executions", 1));

        let report = tracker.to_report();
        assert_eq!(report.total("executions"), Some(MetricTotal::Int(2)));
        assert_eq!(
            report.history("executions"),
            Some(&[MetricValue::Int(1), MetricValue::Int(1)][..])
        );
        assert_eq!(report.latest("executions"), Some(&MetricValue::Int(1)));
    }

    #[test]
    fn multi_metric_updates() {
        let tracker = Tracker::new();
        tracker.update(Metrics::new().with("executions", 1).with("shots", 10));
        tracker.update(Metrics::new().with("executions", 1).with("shots", 20));

        let report = tracker.to_report();
        assert_eq!(report.total("executions"), Some(MetricTotal::Int(2)));
        assert_eq!(report.total("shots"), Some(MetricTotal::Int(30)));
        assert_eq!(report.latest("executions"), Some(&MetricValue::Int(1)));
        assert_eq!(report.latest("shots"), Some(&MetricValue::Int(20)));
    }

    #[test]
    fn reset_discards_data_but_not_configuration() {
        let (tracker, received) = tracker_with_callback();
        tracker.update(Metrics::new().with("executions", 1));

        tracker.set_tracking(true);
        tracker.reset();

        assert!(tracker.is_empty());
        // The tracking flag and the callback both survive a reset.
        assert!(tracker.is_tracking());
        tracker.record();
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn record_invokes_callback_with_current_state() {
        let (tracker, received) = tracker_with_callback();

        tracker.update(Metrics::new().with("a", 1).with("b", "b").with("c", None::<i64>));
        tracker.record();

        let reports = received.lock().unwrap();
        let report = reports.last().unwrap();

        assert_eq!(report.total("a"), Some(MetricTotal::Int(1)));
        assert_eq!(report.total("b"), None);
        assert_eq!(report.history("c"), Some(&[MetricValue::Null][..]));
        assert_eq!(report.latest("c"), Some(&MetricValue::Null));
    }

    #[test]
    fn record_does_not_mutate_state() {
        let (tracker, _received) = tracker_with_callback();
        tracker.update(Metrics::new().with("executions", 1));

        tracker.record();
        tracker.record();

        assert_eq!(
            tracker.to_report().total("executions"),
            Some(MetricTotal::Int(1))
        );
        assert_eq!(
            tracker.to_report().history("executions"),
            Some(&[MetricValue::Int(1)][..])
        );
    }

    #[test]
    fn record_on_empty_tracker_reports_empty_snapshot() {
        let (tracker, received) = tracker_with_callback();
        tracker.record();

        let reports = received.lock().unwrap();
        assert!(reports.last().unwrap().is_empty());
    }

    #[test]
    fn update_and_record_reports_once_per_call() {
        let (tracker, received) = tracker_with_callback();

        tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 10));
        tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 20));

        let reports = received.lock().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(
            reports.first().unwrap().total("shots"),
            Some(MetricTotal::Int(10))
        );
        assert_eq!(
            reports.last().unwrap().total("shots"),
            Some(MetricTotal::Int(30))
        );
    }

    #[test]
    fn callback_panic_propagates() {
        let tracker = Tracker::builder()
            .callback(|_report: &Report| panic!("reporter failed"))
            .build();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| tracker.record()));
        assert!(result.is_err());
    }

    #[test]
    fn set_tracking_gates_without_a_session() {
        let tracker = Tracker::new();

        tracker.set_tracking(true);
        assert!(tracker.is_tracking());

        tracker.set_tracking(false);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn timed_tracker_injects_time_metric() {
        let clock = FakePlatform::new();
        let tracker = Tracker::builder_with_platform(PlatformFacade::fake(clock.clone()))
            .timed()
            .build();

        clock.advance(Duration::from_millis(100));
        tracker.update(Metrics::new().with("executions", 1));

        clock.advance(Duration::from_millis(300));
        tracker.update(Metrics::new().with("executions", 1));

        let report = tracker.to_report();
        assert_eq!(
            report.history("time"),
            Some(&[MetricValue::Float(0.1), MetricValue::Float(0.3)][..])
        );
        assert_eq!(report.total("time"), Some(MetricTotal::Float(0.4)));
        assert_eq!(report.latest("time"), Some(&MetricValue::Float(0.3)));
    }

    #[test]
    fn timed_tracker_overrides_caller_supplied_time() {
        let clock = FakePlatform::new();
        let tracker = Tracker::builder_with_platform(PlatformFacade::fake(clock.clone()))
            .timed()
            .build();

        clock.advance(Duration::from_millis(200));
        tracker.update(Metrics::new().with("time", 99.0));

        let report = tracker.to_report();
        assert_eq!(report.history("time"), Some(&[MetricValue::Float(0.2)][..]));
    }

    #[test]
    fn reset_restarts_the_timer() {
        let clock = FakePlatform::new();
        let tracker = Tracker::builder_with_platform(PlatformFacade::fake(clock.clone()))
            .timed()
            .build();

        // A long gap before tracking resumes must not leak into the first
        // post-reset measurement.
        clock.advance(Duration::from_secs(3600));
        tracker.reset();
        clock.advance(Duration::from_millis(50));
        tracker.update(Metrics::new());

        let report = tracker.to_report();
        assert_eq!(report.latest("time"), Some(&MetricValue::Float(0.05)));
    }

    #[test]
    fn clones_share_state() {
        let tracker = Tracker::new();
        let attached_handle = tracker.clone();

        attached_handle.update(Metrics::new().with("executions", 1));
        tracker.set_tracking(true);

        assert_eq!(
            tracker.to_report().total("executions"),
            Some(MetricTotal::Int(1))
        );
        assert!(attached_handle.is_tracking());
    }

    #[test]
    fn display_delegates_to_report() {
        let tracker = Tracker::new();
        tracker.update(Metrics::new().with("a", 1).with("b", 2));

        assert_eq!(tracker.to_string(), "Totals: a = 1\tb = 2\t\n");
    }

    // The type is thread-safe.
    static_assertions::assert_impl_all!(Tracker: Send, Sync);
}
