//! # pixfmt-ops
//!
//! Plane geometry operations over caller-owned picture buffers.
//!
//! # Modules
//!
//! - [`crop`](mod@crop) - re-point planes at a crop origin (no copy)
//! - [`pad`](mod@pad) - solid margins around optional copied content
//! - [`shrink`] - 2x2, 4x4 and 8x8 box downscaling
//! - [`deinterlace`](mod@deinterlace) - odd-field interpolation, copying or in place
//!
//! Crop and pad accept every planar YUV format; deinterlace accepts the
//! 8-bit formats in [`DEINTERLACE_FORMATS`].
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{Picture, PictureMut, PixelFormat, PlaneMut, PlaneRef};
//! use pixfmt_dsp::{CpuFlags, DspConfig};
//! use pixfmt_ops::PlaneOps;
//!
//! let ops = PlaneOps::new(&DspConfig::new(CpuFlags::all()));
//!
//! let src = vec![100u8; 4 * 4];
//! let mut out = vec![0u8; 4 * 4];
//! let mut dst = PictureMut::new(vec![PlaneMut::new(&mut out, 4)]);
//! ops.deinterlace(&mut dst, &Picture::new(&[PlaneRef::new(&src, 4)]), PixelFormat::Gray8, 4, 4)?;
//! drop(dst);
//! assert!(out.iter().all(|&p| p == 100));
//! # Ok::<(), pixfmt_ops::OpsError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - process planes concurrently with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod layout;
pub mod crop;
pub mod deinterlace;
pub mod pad;
pub mod shrink;

pub use crop::{crop, crop_mut};
pub use deinterlace::{deinterlace, deinterlace_in_place, DEINTERLACE_FORMATS};
pub use error::{OpsError, OpsResult};
pub use pad::{pad, Margins};
pub use shrink::{shrink22, shrink44, shrink88};

use pixfmt_core::{Picture, PictureMut, PixelFormat};
use pixfmt_dsp::{DspConfig, PlaneDsp};
use tracing::debug;

/// Plane operations bound to one set of line kernels.
///
/// Build once per pipeline; the context is `Copy` and can be shared
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneOps {
    dsp: PlaneDsp,
}

impl PlaneOps {
    /// Builds the kernels for `config` and binds them.
    pub fn new(config: &DspConfig) -> Self {
        debug!(cpu = config.cpu.bits(), "binding plane operations");
        Self::with_dsp(PlaneDsp::new(config))
    }

    /// Binds an already built kernel table.
    pub fn with_dsp(dsp: PlaneDsp) -> Self {
        Self { dsp }
    }

    /// The bound kernels.
    pub fn dsp(&self) -> &PlaneDsp {
        &self.dsp
    }

    /// See [`crop()`].
    pub fn crop<'a>(&self, src: &Picture<'a>, format: PixelFormat, top: usize, left: usize) -> OpsResult<Picture<'a>> {
        crop::crop(src, format, top, left)
    }

    /// See [`crop_mut()`].
    pub fn crop_mut<'a>(
        &self,
        src: PictureMut<'a>,
        format: PixelFormat,
        top: usize,
        left: usize,
    ) -> OpsResult<PictureMut<'a>> {
        crop::crop_mut(src, format, top, left)
    }

    /// See [`pad()`].
    #[allow(clippy::too_many_arguments)]
    pub fn pad(
        &self,
        dst: &mut PictureMut<'_>,
        src: Option<&Picture<'_>>,
        width: usize,
        height: usize,
        format: PixelFormat,
        margins: Margins,
        fill: [u16; 3],
    ) -> OpsResult<()> {
        pad::pad(dst, src, width, height, format, margins, fill)
    }

    /// See [`shrink22()`].
    pub fn shrink22(&self, dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
        shrink::shrink22(dst, dst_stride, src, src_stride, width, height)
    }

    /// See [`shrink44()`].
    pub fn shrink44(&self, dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
        shrink::shrink44(dst, dst_stride, src, src_stride, width, height)
    }

    /// See [`shrink88()`].
    pub fn shrink88(&self, dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
        shrink::shrink88(dst, dst_stride, src, src_stride, width, height)
    }

    /// [`deinterlace()`] with the bound kernels.
    pub fn deinterlace(
        &self,
        dst: &mut PictureMut<'_>,
        src: &Picture<'_>,
        format: PixelFormat,
        width: usize,
        height: usize,
    ) -> OpsResult<()> {
        deinterlace::deinterlace_with(&self.dsp, dst, src, format, width, height)
    }

    /// [`deinterlace_in_place()`] with the bound kernels.
    pub fn deinterlace_in_place(
        &self,
        pic: &mut PictureMut<'_>,
        format: PixelFormat,
        width: usize,
        height: usize,
    ) -> OpsResult<()> {
        deinterlace::deinterlace_in_place_with(&self.dsp, pic, format, width, height)
    }
}
