//! # pixfmt-core
//!
//! Pixel format capability model.
//!
//! This crate describes what each supported pixel format *is* and scores what
//! is lost when converting between two of them:
//!
//! - [`PixelFormat`], [`FormatDescriptor`] - the format table and its facts
//! - [`ChromaDescriptor`] - subsampling and plane geometry per format
//! - [`LossMask`], [`compute_loss`] - loss categories of a conversion
//! - [`select_best_format`] - least lossy target among candidates
//! - [`Picture`], [`PictureMut`] - borrowed plane views over caller memory
//!
//! ## Format Selection
//!
//! Selection walks a fixed ladder of loss tolerances and, at the first level
//! with any acceptable candidate, keeps the one with the smallest average bits
//! per pixel:
//!
//! ```rust
//! use pixfmt_core::{select_best_format, LossMask, PixelFormat};
//!
//! let pick = select_best_format(
//!     &[PixelFormat::Yuv420p, PixelFormat::Rgb24],
//!     PixelFormat::Rgb24,
//!     false,
//! )?;
//! assert_eq!(pick.format, PixelFormat::Rgb24);
//! assert_eq!(pick.loss, LossMask::NONE);
//! # Ok::<(), pixfmt_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `pixfmt-dsp` is independent of
//! it; `pixfmt-ops` builds on both:
//!
//! ```text
//! pixfmt-core (this crate)     pixfmt-dsp (kernel dispatch)
//!          ^                          ^
//!          |                          |
//!          +-------- pixfmt-ops ------+
//!             (crop, pad, shrink, deinterlace)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for descriptor and mask types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chroma;
pub mod error;
pub mod format;
pub mod loss;
pub mod plane;
pub mod select;

pub use chroma::{chroma_descriptor, chroma_subsampling, ChromaDescriptor, ChromaPlanes};
pub use error::{Error, Result};
pub use format::{ColorModel, FormatDescriptor, Layout, PixelFormat};
pub use loss::{compute_loss, LossMask};
pub use plane::{Picture, PictureMut, PlaneMut, PlaneRef, MAX_PLANES};
pub use select::{
    avg_bits_per_pixel, select_best_format, select_best_format_mask, select_best_format_raw,
    Selection, MAX_CANDIDATES, TOLERANCE_LADDER,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chroma::{chroma_descriptor, chroma_subsampling, ChromaDescriptor};
    pub use crate::error::{Error, Result};
    pub use crate::format::{ColorModel, FormatDescriptor, Layout, PixelFormat};
    pub use crate::loss::{compute_loss, LossMask};
    pub use crate::plane::{Picture, PictureMut, PlaneMut, PlaneRef};
    pub use crate::select::{select_best_format, Selection};
}
