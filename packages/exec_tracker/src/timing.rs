//! The timing specialization that derives a `time` metric per update.

use std::time::Duration;

use crate::Metrics;
use crate::pal::{Platform, PlatformFacade};

/// Derives a `time` metric from wall-clock deltas between updates.
///
/// Sits in front of the accumulator: on every update it measures the time
/// elapsed since the previous update (or since the last restart) and injects
/// it into the metrics as `time`, in seconds, overwriting any caller-supplied
/// value under that name.
#[derive(Debug)]
pub(crate) struct UpdateTimer {
    platform: PlatformFacade,
    last: Duration,
}

impl UpdateTimer {
    /// The name of the injected metric.
    pub(crate) const METRIC_NAME: &'static str = "time";

    /// Creates a timer whose first measurement starts now.
    pub(crate) fn new(platform: PlatformFacade) -> Self {
        let last = platform.monotonic_time();
        Self { platform, last }
    }

    /// Measures the delta since the previous update and injects it into the
    /// given metrics as `time`.
    pub(crate) fn inject(&mut self, metrics: &mut Metrics) {
        let now = self.platform.monotonic_time();
        let elapsed = now.saturating_sub(self.last);
        self.last = now;

        metrics.set(Self::METRIC_NAME, elapsed.as_secs_f64());
    }

    /// Restarts the reference timestamp to now.
    ///
    /// Runs on every reset so the first post-reset measurement covers only
    /// time spent tracking, not the gap before tracking resumed.
    pub(crate) fn restart(&mut self) {
        self.last = self.platform.monotonic_time();
    }
}
