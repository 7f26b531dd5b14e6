//! Cropping by re-pointing planes.
//!
//! No pixel moves: each plane of the result is a sub-slice of the input
//! starting at the crop origin, with the input's stride. Chroma offsets are
//! taken on the subsampled grid, so an odd `top` or `left` on a 4:2:0 format
//! truncates to the chroma sample above/left of it.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{Picture, PixelFormat, PlaneRef};
//! use pixfmt_ops::crop;
//!
//! let y: Vec<u8> = (0..64).collect();
//! let c = vec![128u8; 16];
//! let pic = Picture::new(&[PlaneRef::new(&y, 8), PlaneRef::new(&c, 4), PlaneRef::new(&c, 4)]);
//!
//! let cropped = crop(&pic, PixelFormat::Yuv420p, 2, 2).unwrap();
//! assert_eq!(cropped.plane(0).unwrap().row(0, 2), &[18, 19]);
//! ```

use pixfmt_core::{Picture, PictureMut, PixelFormat};
use tracing::trace;

use crate::layout::{planar_layout, planes};
use crate::{OpsError, OpsResult};

/// Returns views of `src` starting at luma row `top`, column `left`.
///
/// # Errors
///
/// - [`OpsError::UnsupportedFormat`] for non planar YUV formats
/// - [`OpsError::BufferTooSmall`] if a plane is missing or the offset is past its end
pub fn crop<'a>(src: &Picture<'a>, format: PixelFormat, top: usize, left: usize) -> OpsResult<Picture<'a>> {
    let layout = planar_layout(format)?;
    trace!(%format, top, left, "crop");

    let mut out = Picture::default();
    for (i, geo) in planes(layout).enumerate() {
        let plane = src.require_plane(i)?;
        out.set_plane(i, plane.advance(i, geo.offset(plane.stride(), top, left))?);
    }
    Ok(out)
}

/// Mutable counterpart of [`crop`]; consumes the views it re-points.
///
/// # Errors
///
/// Same as [`crop`].
pub fn crop_mut<'a>(
    src: PictureMut<'a>,
    format: PixelFormat,
    top: usize,
    left: usize,
) -> OpsResult<PictureMut<'a>> {
    let layout = planar_layout(format)?;
    trace!(%format, top, left, "crop_mut");

    let mut slots = src.into_planes().into_iter();
    let mut out = Vec::with_capacity(layout.planes as usize);
    for (i, geo) in planes(layout).enumerate() {
        let plane = slots
            .next()
            .flatten()
            .ok_or(OpsError::BufferTooSmall { plane: i, len: 0, needed: 1 })?;
        let offset = geo.offset(plane.stride(), top, left);
        out.push(plane.advance(i, offset)?);
    }
    Ok(PictureMut::new(out))
}
