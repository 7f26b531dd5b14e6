//! Error types for pixfmt-dsp.

use thiserror::Error;

/// Errors reported while building DSP tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DspError {
    /// Raw permutation tag outside `1..=6`.
    #[error("unknown IDCT permutation tag {tag}")]
    UnknownPermutation {
        /// The rejected tag.
        tag: u8,
    },
}

/// Result type for DSP table setup.
pub type DspResult<T> = std::result::Result<T, DspError>;
