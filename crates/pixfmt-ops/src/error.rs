//! Error types for plane operations.

use pixfmt_core::PixelFormat;
use thiserror::Error;

/// Error type for plane operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Operation not defined for this pixel format.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(PixelFormat),

    /// Width, height or margins out of range.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A plane is missing or shorter than its geometry needs.
    #[error("plane {plane} too small: {len} bytes, need {needed}")]
    BufferTooSmall {
        /// Plane index.
        plane: usize,
        /// Bytes available.
        len: usize,
        /// Bytes needed.
        needed: usize,
    },

    /// Any other error from the format model.
    #[error(transparent)]
    Core(pixfmt_core::Error),
}

impl From<pixfmt_core::Error> for OpsError {
    fn from(err: pixfmt_core::Error) -> Self {
        use pixfmt_core::Error as E;
        match err {
            E::UnsupportedFormat { format } => Self::UnsupportedFormat(format),
            E::InvalidDimensions { width, height, reason } => {
                Self::InvalidDimensions(format!("{width}x{height}: {reason}"))
            }
            E::BufferTooSmall { plane, len, needed } => Self::BufferTooSmall { plane, len, needed },
            other => Self::Core(other),
        }
    }
}

/// Result type for plane operations.
pub type OpsResult<T> = Result<T, OpsError>;
