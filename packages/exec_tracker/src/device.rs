//! The boundary between a tracker and the backend it attaches to.

use crate::Tracker;

/// The contract a backend fulfills to host a tracker.
///
/// A tracker knows nothing else about the backend: one capability query
/// gating attachment, one name for error messages, and one mutable slot the
/// attached tracker handle is stored in. The backend drives the attached
/// tracker from its own execution path, calling
/// [`Tracker::update_and_record`] once per unit of work while
/// [`Tracker::is_tracking`] is true; the tracker never polls the backend.
///
/// # Examples
///
/// ```
/// use exec_tracker::{Device, Metrics, Tracker};
///
/// struct Simulator {
///     tracker: Option<Tracker>,
/// }
///
/// impl Simulator {
///     fn execute(&self, shots: i64) {
///         // The actual work would happen here.
///         if let Some(tracker) = self.tracker.as_ref().filter(|t| t.is_tracking()) {
///             tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", shots));
///         }
///     }
/// }
///
/// impl Device for Simulator {
///     fn name(&self) -> &str {
///         "simulator"
///     }
///
///     fn supports_tracking(&self) -> bool {
///         true
///     }
///
///     fn attach_tracker(&mut self, tracker: Tracker) {
///         self.tracker = Some(tracker);
///     }
/// }
///
/// let mut device = Simulator { tracker: None };
/// let tracker = Tracker::builder().attach(&mut device).unwrap();
///
/// {
///     let _session = tracker.session();
///     device.execute(10);
/// }
///
/// assert_eq!(tracker.to_report().total("shots").unwrap().as_f64(), 10.0);
/// ```
pub trait Device {
    /// The name the device identifies itself by in error messages.
    fn name(&self) -> &str;

    /// Whether this device is able to host and drive a tracker.
    fn supports_tracking(&self) -> bool;

    /// Stores the attached tracker handle.
    ///
    /// Called exactly once per successful
    /// [`TrackerBuilder::attach`](crate::TrackerBuilder::attach); only
    /// invoked after [`supports_tracking`](Self::supports_tracking) returned
    /// true.
    fn attach_tracker(&mut self, tracker: Tracker);
}
