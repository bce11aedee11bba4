//! Example demonstrating the timing specialization and a reporting callback.
//!
//! A timed tracker derives a `time` metric on every update: the wall-clock
//! duration since the previous update. A callback replaces the default
//! stdout line, receiving a detached report snapshot per recorded unit of
//! work.
//!
//! Run with: `cargo run --example exec_tracker_timing`.
#![allow(
    clippy::unwrap_used,
    reason = "this is example code that does not need production-level safety"
)]

use std::thread;
use std::time::Duration;

use exec_tracker::{Metrics, Report, Tracker};

fn main() {
    println!("=== Timed Tracking Example ===");
    println!();

    let tracker = Tracker::builder()
        .timed()
        .callback(|report: &Report| {
            let executions = report.total("executions").unwrap();
            let time = report.latest("time").unwrap();
            println!("  [callback] executions so far: {executions}, last took {time}s");
        })
        .build();

    println!("Running three executions with varying delays:");
    {
        let _session = tracker.session();

        for delay_ms in [5, 20, 50] {
            thread::sleep(Duration::from_millis(delay_ms));
            tracker.update_and_record(Metrics::new().with("executions", 1));
        }
    }
    println!();

    let report = tracker.to_report();
    println!(
        "✓ Total tracked time: {:.3}s over {} executions",
        report.total("time").unwrap().as_f64(),
        report.total("executions").unwrap()
    );
    println!("✓ Per-execution times: {:?}", report.history("time").unwrap());
}
