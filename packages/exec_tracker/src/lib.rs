//! Execution tracking for device backends.
//!
//! This package records metrics - execution counts, shot counts, elapsed time
//! and arbitrary caller-supplied key/value pairs - for every unit of work a
//! backend ("device") performs while tracking is active. It is consumed as a
//! scoped recording session wrapped around one or more invocations of device
//! work.
//!
//! The core functionality includes:
//! - [`Tracker`] - Accumulates running totals, full history and latest values per metric
//! - [`Session`] - Guard during which tracking is active; dropping it always deactivates tracking
//! - [`Metrics`] - Ordered name/value pairs describing one unit of work
//! - [`Report`] - Detached snapshot of accumulated data, mergeable across trackers
//! - [`Device`] - The boundary contract a backend fulfills to host a tracker
//! - [`TrackerBuilder`] - Configures persistence, timing and the reporting callback
//!
//! # Simple usage
//!
//! Wrap device work in a session and let the device drive the tracker:
//!
//! ```
//! use exec_tracker::{MetricTotal, Metrics, Tracker};
//!
//! # fn main() {
//! let tracker = Tracker::new();
//!
//! {
//!     let _session = tracker.session();
//!
//!     // The device calls this once per unit of work while tracking is active.
//!     tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 10));
//!     tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", 20));
//! }
//!
//! let report = tracker.to_report();
//! assert_eq!(report.total("executions"), Some(MetricTotal::Int(2)));
//! assert_eq!(report.total("shots"), Some(MetricTotal::Int(30)));
//! # }
//! ```
//!
//! # Timing
//!
//! A timed tracker derives a `time` metric on every update: the wall-clock
//! duration, in seconds, since the previous update (or since the session
//! started):
//!
//! ```
//! use exec_tracker::{Metrics, Tracker};
//!
//! # fn main() {
//! let tracker = Tracker::builder().timed().build();
//!
//! {
//!     let _session = tracker.session();
//!     tracker.update_and_record(Metrics::new().with("executions", 1));
//! }
//!
//! assert!(tracker.to_report().total("time").unwrap().as_f64() >= 0.0);
//! # }
//! ```
//!
//! # Reporting
//!
//! Each recorded unit of work produces a report. Without a callback this is a
//! single `Totals: ` line on stdout; with a callback, the callback receives a
//! detached [`Report`] snapshot instead:
//!
//! ```
//! use exec_tracker::{Metrics, Report, Tracker};
//!
//! # fn main() {
//! let tracker = Tracker::builder()
//!     .callback(|report: &Report| {
//!         let executions = report.total("executions");
//!         // Forward the snapshot wherever it needs to go.
//!         assert!(executions.is_some());
//!     })
//!     .build();
//!
//! let _session = tracker.session();
//! tracker.update_and_record(Metrics::new().with("executions", 1));
//! # }
//! ```
//!
//! # Threading
//!
//! A [`Tracker`] is a shared handle; clones observe the same state, guarded
//! by one lock per tracker. Every operation is a single atomic unit under
//! that lock, so a concurrent `record` never observes a partially applied
//! `update`.

mod accumulator;
mod constants;
mod device;
mod error;
mod metric_map;
mod metrics;
mod pal;
mod report;
mod session;
mod timing;
mod tracker;
mod tracker_builder;
mod value;

pub(crate) use constants::ERR_POISONED_LOCK;
pub use device::Device;
pub use error::Error;
pub use metrics::Metrics;
pub use report::Report;
pub use session::Session;
pub use tracker::Tracker;
pub use tracker_builder::TrackerBuilder;
pub use value::{MetricTotal, MetricValue};
