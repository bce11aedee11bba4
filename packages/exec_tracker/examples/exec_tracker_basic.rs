//! Simplified example demonstrating key `exec_tracker` types working together.
//!
//! This example shows how to use the main types in the `exec_tracker` package:
//! - `Device`: The backend boundary a tracker attaches to
//! - `Tracker`: Accumulates totals, history and latest values per metric
//! - `Session`: The scope during which the device records its work
//!
//! Run with: `cargo run --example exec_tracker_basic`.
#![allow(
    clippy::unwrap_used,
    reason = "this is example code that does not need production-level safety"
)]

use exec_tracker::{Device, Metrics, Tracker};

/// A toy simulator backend. A real backend would perform actual work in
/// `execute` and decide for itself which metrics are worth reporting.
struct Simulator {
    tracker: Option<Tracker>,
}

impl Simulator {
    fn new() -> Self {
        Self { tracker: None }
    }

    fn execute(&self, shots: i64) {
        // The simulated work would happen here.

        if let Some(tracker) = self.tracker.as_ref().filter(|t| t.is_tracking()) {
            tracker.update_and_record(Metrics::new().with("executions", 1).with("shots", shots));
        }
    }
}

impl Device for Simulator {
    fn name(&self) -> &str {
        "simulator"
    }

    fn supports_tracking(&self) -> bool {
        true
    }

    fn attach_tracker(&mut self, tracker: Tracker) {
        self.tracker = Some(tracker);
    }
}

fn main() {
    println!("=== Execution Tracking Example ===");
    println!();

    let mut device = Simulator::new();
    let tracker = Tracker::builder().attach(&mut device).unwrap();
    println!("✓ Attached tracker to '{}'", device.name());
    println!();

    // Work performed outside a session records nothing.
    device.execute(100);
    assert!(tracker.is_empty());
    println!("✓ Execution outside a session recorded nothing");
    println!();

    // Each execution inside the session prints one "Totals: " line.
    println!("Running three executions inside a session:");
    {
        let _session = tracker.session();
        device.execute(10);
        device.execute(20);
        device.execute(30);
    }
    println!();

    // The accumulated data remains inspectable after the session.
    let report = tracker.to_report();
    println!(
        "✓ Session total: {} executions, {} shots",
        report.total("executions").unwrap(),
        report.total("shots").unwrap()
    );

    let shots: Vec<_> = report.history("shots").unwrap().to_vec();
    println!("✓ Shots history: {shots:?}");
    println!();

    println!("Tracking stopped when the session guard dropped.");
}
