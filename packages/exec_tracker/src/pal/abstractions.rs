//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides the clock the timing specialization measures with.
///
/// This trait abstracts the underlying time source, allowing for both the
/// real implementation (the operating system's monotonic clock) and a fake
/// implementation (for testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the time elapsed since an arbitrary fixed epoch.
    ///
    /// The value is meaningless in isolation; only deltas between two calls
    /// on the same platform instance carry meaning.
    fn monotonic_time(&self) -> Duration;
}
