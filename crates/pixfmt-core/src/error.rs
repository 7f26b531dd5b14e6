//! Error types for pixfmt-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of format selection and of
//! the plane views handed to the geometry operations:
//! - Format support checks (crop/pad/deinterlace on an unsupported format)
//! - Dimension and stride checks on caller-supplied buffers
//! - Candidate list validation and best-format search
//!
//! None of these are fatal: the calling pipeline decides whether to abort,
//! fall back or retry with a different request.
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{Error, PixelFormat};
//!
//! let err = Error::unsupported_format(PixelFormat::Rgb24);
//! assert!(err.to_string().contains("rgb24"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

use crate::PixelFormat;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by format selection and plane handling.
///
/// # Categories
///
/// - **Format errors**: [`UnsupportedFormat`](Error::UnsupportedFormat)
/// - **Geometry errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`InvalidStride`](Error::InvalidStride), [`BufferTooSmall`](Error::BufferTooSmall)
/// - **Selection errors**: [`MalformedCandidateList`](Error::MalformedCandidateList),
///   [`NoCompatibleFormat`](Error::NoCompatibleFormat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operation invoked on a pixel format outside its supported set.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// The rejected format
        format: PixelFormat,
    },

    /// Dimensions violate a precondition of the operation.
    ///
    /// Deinterlacing, for instance, needs both dimensions to be non-zero
    /// multiples of 4.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Stride is smaller than one row of the plane.
    #[error("stride {stride} is less than row size {row_bytes}")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Bytes one row needs
        row_bytes: usize,
    },

    /// A plane buffer cannot hold the requested geometry.
    #[error("plane {plane} buffer holds {len} bytes, {needed} needed")]
    BufferTooSmall {
        /// Plane index
        plane: usize,
        /// Bytes available
        len: usize,
        /// Bytes required
        needed: usize,
    },

    /// Candidate list is unterminated, oversized or contains duplicates.
    #[error("malformed candidate list: {reason}")]
    MalformedCandidateList {
        /// What was wrong with the list
        reason: String,
    },

    /// No candidate survived even the most permissive loss tolerance.
    #[error("no compatible pixel format for source {src}")]
    NoCompatibleFormat {
        /// Source format of the search
        src: PixelFormat,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: PixelFormat) -> Self {
        Self::UnsupportedFormat { format }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidStride`] error.
    #[inline]
    pub fn invalid_stride(stride: usize, row_bytes: usize) -> Self {
        Self::InvalidStride { stride, row_bytes }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(plane: usize, len: usize, needed: usize) -> Self {
        Self::BufferTooSmall { plane, len, needed }
    }

    /// Creates an [`Error::MalformedCandidateList`] error.
    #[inline]
    pub fn malformed_list(reason: impl Into<String>) -> Self {
        Self::MalformedCandidateList {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error came out of the best-format search.
    #[inline]
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedCandidateList { .. } | Self::NoCompatibleFormat { .. }
        )
    }

    /// Returns `true` if this is a buffer geometry error.
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::InvalidStride { .. } | Self::BufferTooSmall { .. }
        )
    }
}
