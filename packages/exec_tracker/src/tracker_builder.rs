//! Builder for trackers with non-default configuration.

use std::fmt;

use crate::error::Result;
use crate::pal::PlatformFacade;
use crate::timing::UpdateTimer;
use crate::tracker::Callback;
use crate::{Device, Error, Report, Tracker};

/// Creates instances of [`Tracker`].
///
/// All options have defaults, so `build()` can be called at any point. Use
/// `Tracker::builder()` to create a new instance of this builder.
///
/// # Examples
///
/// ```
/// use exec_tracker::Tracker;
///
/// let tracker = Tracker::builder()
///     .persistent(true)
///     .timed()
///     .build();
/// ```
pub struct TrackerBuilder {
    persistent: bool,
    timed: bool,
    callback: Option<Callback>,
    platform: PlatformFacade,
}

impl TrackerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            persistent: false,
            timed: false,
            callback: None,
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a builder measuring time with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that doesn't rely on the real one.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            ..Self::new()
        }
    }

    /// Keeps accumulated data across session entries.
    ///
    /// The default is `false`: entering a session resets totals, history and
    /// latest values, so each session starts from a clean slate. A persistent
    /// tracker instead carries its accumulated data into the next session.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Derives a `time` metric on every update.
    ///
    /// The value is the wall-clock duration, in seconds, since the previous
    /// update (or since the last reset for the first update), and overwrites
    /// any caller-supplied `time` entry.
    #[must_use]
    pub fn timed(mut self) -> Self {
        self.timed = true;
        self
    }

    /// Reports through the given callback instead of printing to stdout.
    ///
    /// The callback receives a detached [`Report`] snapshot per
    /// [`record`](Tracker::record) call. It runs while the tracker's lock is
    /// held, so its latency is attributed to the caller of `record` and it
    /// must not call back into the tracker - doing so deadlocks.
    #[must_use]
    pub fn callback(mut self, callback: impl FnMut(&Report) + Send + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Builds the tracker without attaching it to a device.
    #[must_use]
    pub fn build(self) -> Tracker {
        let timer = if self.timed {
            Some(UpdateTimer::new(self.platform))
        } else {
            None
        };

        Tracker::from_parts(self.persistent, timer, self.callback)
    }

    /// Builds the tracker and attaches it to a device.
    ///
    /// Performs exactly one check: the device must declare the tracking
    /// capability. On success the device receives a clone of the returned
    /// handle through [`Device::attach_tracker`], so the device's execution
    /// path and the caller observe the same tracker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotSupported`] naming the device when its
    /// capability query reports tracking unsupported; nothing is constructed
    /// or attached in that case.
    pub fn attach<D>(self, device: &mut D) -> Result<Tracker>
    where
        D: Device + ?Sized,
    {
        if !device.supports_tracking() {
            return Err(Error::DeviceNotSupported {
                device: device.name().to_string(),
            });
        }

        let tracker = self.build();
        device.attach_tracker(tracker.clone());
        Ok(tracker)
    }
}

impl fmt::Debug for TrackerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerBuilder")
            .field("persistent", &self.persistent)
            .field("timed", &self.timed)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .field("platform", &self.platform)
            .finish()
    }
}
