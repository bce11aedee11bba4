use thiserror::Error;

/// Errors that can occur when constructing and attaching a tracker.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The target device does not declare support for tracking, so there is
    /// nothing for a tracker to attach to.
    #[error("device '{device}' does not support tracking")]
    DeviceNotSupported {
        /// The name the device identifies itself by.
        device: String,
    },
}

/// A specialized `Result` type for tracker operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
