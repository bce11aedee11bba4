//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation lets tests control the clock instead of relying on the
/// real one. Multiple clones of the same `FakePlatform` share the same
/// underlying time state, allowing tests to advance time after the platform
/// has been handed to a tracker.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a new fake platform with the clock at zero.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the current time.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_time(&self, time: Duration) {
        *self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = time;
    }

    /// Advances the current time by the given amount.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        *now = now
            .checked_add(delta)
            .expect("fake clock overflows Duration - this indicates an unrealistic scenario");
    }
}

impl Platform for FakePlatform {
    fn monotonic_time(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_zero() {
        let platform = FakePlatform::new();
        assert_eq!(platform.monotonic_time(), Duration::ZERO);
    }

    #[test]
    fn sets_time() {
        let platform = FakePlatform::new();
        platform.set_time(Duration::from_millis(150));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
    }

    #[test]
    fn advances_time() {
        let platform = FakePlatform::new();
        platform.set_time(Duration::from_millis(100));
        platform.advance(Duration::from_millis(50));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other.
        platform1.set_time(Duration::from_millis(100));
        assert_eq!(platform2.monotonic_time(), Duration::from_millis(100));

        platform2.advance(Duration::from_millis(25));
        assert_eq!(platform1.monotonic_time(), Duration::from_millis(125));
    }
}
