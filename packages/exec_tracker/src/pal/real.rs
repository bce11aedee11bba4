//! Real platform implementation using the operating system's monotonic clock.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction, anchored to an `Instant`
/// captured at construction time.
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform {
    epoch: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn monotonic_time(&self) -> Duration {
        self.epoch.elapsed()
    }
}
