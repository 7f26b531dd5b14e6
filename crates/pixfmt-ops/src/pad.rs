//! Padding a picture with solid margins, optionally copying content in.
//!
//! `width` and `height` are the padded output size in luma pixels; the
//! margins are carved out of it. Chroma planes work on the subsampled grid:
//! every margin and size is shifted by the plane's subsampling before use.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{PictureMut, PixelFormat, PlaneMut};
//! use pixfmt_ops::{pad, Margins};
//!
//! let (mut y, mut u, mut v) = (vec![0u8; 8 * 8], vec![0u8; 4 * 4], vec![0u8; 4 * 4]);
//! let mut pic = PictureMut::new(vec![
//!     PlaneMut::new(&mut y, 8),
//!     PlaneMut::new(&mut u, 4),
//!     PlaneMut::new(&mut v, 4),
//! ]);
//! let margins = Margins { top: 2, bottom: 2, left: 2, right: 2 };
//! pad(&mut pic, None, 8, 8, PixelFormat::Yuv420p, margins, [16, 128, 128]).unwrap();
//! drop(pic);
//! assert_eq!(y[0], 16);
//! assert_eq!(y[3 * 8 + 3], 0); // interior untouched without a source
//! ```

use pixfmt_core::{ChromaDescriptor, Picture, PictureMut, PixelFormat, PlaneMut, PlaneRef};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::layout::{fill_pattern, planar_layout, planes, PlaneGeometry};
use crate::{OpsError, OpsResult};

/// Margin sizes in luma pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    /// Rows above the content.
    pub top: usize,
    /// Rows below the content.
    pub bottom: usize,
    /// Columns left of the content.
    pub left: usize,
    /// Columns right of the content.
    pub right: usize,
}

impl Margins {
    /// Same margin on every side.
    pub const fn uniform(m: usize) -> Self {
        Self {
            top: m,
            bottom: m,
            left: m,
            right: m,
        }
    }
}

/// Pads `dst` to `width` x `height` with `fill` margins.
///
/// `fill` holds Y, U and V; alpha planes are filled opaque. When `src` is
/// given its planes are copied into the interior.
///
/// # Errors
///
/// - [`OpsError::UnsupportedFormat`] for non planar YUV formats
/// - [`OpsError::InvalidDimensions`] if the margins do not fit
/// - [`OpsError::BufferTooSmall`] if a plane cannot hold its rows
pub fn pad(
    dst: &mut PictureMut<'_>,
    src: Option<&Picture<'_>>,
    width: usize,
    height: usize,
    format: PixelFormat,
    margins: Margins,
    fill: [u16; 3],
) -> OpsResult<()> {
    let layout = planar_layout(format)?;
    trace!(%format, width, height, ?margins, has_src = src.is_some(), "pad");

    let fits = |a: usize, b: usize, size: usize| a.checked_add(b).is_some_and(|sum| sum <= size);
    if width == 0
        || height == 0
        || !fits(margins.left, margins.right, width)
        || !fits(margins.top, margins.bottom, height)
    {
        return Err(OpsError::InvalidDimensions(format!(
            "{width}x{height} cannot hold margins {margins:?}"
        )));
    }

    let count = layout.planes as usize;
    let jobs = planes(layout)
        .enumerate()
        .map(|(i, geo)| -> OpsResult<_> {
            let src_plane = src.map(|s| s.require_plane(i)).transpose()?;
            Ok((i, geo, src_plane))
        })
        .collect::<OpsResult<Vec<_>>>()?;
    let targets = dst.planes_mut(count)?;

    #[cfg(feature = "parallel")]
    let jobs = jobs.into_par_iter().zip(targets);
    #[cfg(not(feature = "parallel"))]
    let mut jobs = jobs.into_iter().zip(targets);

    jobs.try_for_each(|((index, geo, src), plane)| {
        pad_plane(plane, src, layout, index, geo, width, height, margins, fill)
    })
}

fn fill_row(row: &mut [u8], pattern: &[u8]) {
    if let [byte] = pattern {
        row.fill(*byte);
    } else {
        for px in row.chunks_exact_mut(pattern.len()) {
            px.copy_from_slice(pattern);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn pad_plane(
    plane: &mut PlaneMut<'_>,
    src: Option<PlaneRef<'_>>,
    layout: &ChromaDescriptor,
    index: usize,
    geo: PlaneGeometry,
    width: usize,
    height: usize,
    margins: Margins,
    fill: [u16; 3],
) -> OpsResult<()> {
    let pattern = fill_pattern(layout, index, fill);
    let ys = geo.shift_y;

    // Right and bottom margins absorb the subsampling remainder so every
    // sample of the plane grid is written.
    let row_bytes = geo.row_bytes(width);
    let left = geo.row_bytes(margins.left);
    let inner = geo.row_bytes(width - margins.left - margins.right);

    let total_rows = height >> ys;
    let top_rows = margins.top >> ys;
    let interior = (height - margins.top - margins.bottom) >> ys;
    let bottom_start = top_rows + interior;

    plane.require(index, row_bytes, total_rows)?;
    if let Some(src) = src {
        src.require(index, inner, interior)?;
    }

    for y in 0..top_rows {
        fill_row(plane.row_mut(y, row_bytes), &pattern);
    }
    for y in top_rows..bottom_start {
        let row = plane.row_mut(y, row_bytes);
        fill_row(&mut row[..left], &pattern);
        if let Some(src) = src {
            row[left..left + inner].copy_from_slice(src.row(y - top_rows, inner));
        }
        fill_row(&mut row[left + inner..], &pattern);
    }
    for y in bottom_start..total_rows {
        fill_row(plane.row_mut(y, row_bytes), &pattern);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_filled_interior_copied() {
        let src_y: Vec<u8> = (1..=16).collect();
        let src_c = vec![50u8; 4];
        let src = Picture::new(&[
            PlaneRef::new(&src_y, 4),
            PlaneRef::new(&src_c, 2),
            PlaneRef::new(&src_c, 2),
        ]);

        let (mut y, mut u, mut v) = (vec![0u8; 36], vec![0u8; 9], vec![0u8; 9]);
        let mut dst = PictureMut::new(vec![
            PlaneMut::new(&mut y, 6),
            PlaneMut::new(&mut u, 3),
            PlaneMut::new(&mut v, 3),
        ]);
        pad(&mut dst, Some(&src), 6, 6, PixelFormat::Yuv420p, Margins::uniform(1), [9, 8, 7]).unwrap();
        drop(dst);

        assert_eq!(&y[..6], &[9; 6]);
        assert_eq!(&y[6..12], &[9, 1, 2, 3, 4, 9]);
        assert_eq!(&y[24..30], &[9, 13, 14, 15, 16, 9]);
        assert_eq!(&y[30..], &[9; 6]);
        // 3x3 chroma grid: 2x2 content, remainder goes to right and bottom
        assert_eq!(&u[..6], &[50, 50, 8, 50, 50, 8]);
        assert_eq!(&u[6..], &[8, 8, 8]);
        assert_eq!(v[2], 7);
    }

    #[test]
    fn test_odd_margins_stay_on_chroma_grid() {
        let (mut y, mut u, mut v) = (vec![0u8; 8 * 8], vec![0u8; 16], vec![0u8; 16]);
        let mut dst = PictureMut::new(vec![
            PlaneMut::new(&mut y, 8),
            PlaneMut::new(&mut u, 4),
            PlaneMut::new(&mut v, 4),
        ]);
        let margins = Margins { top: 3, bottom: 1, left: 3, right: 1 };
        pad(&mut dst, None, 8, 8, PixelFormat::Yuv420p, margins, [1, 2, 3]).unwrap();
        drop(dst);

        // Luma: 3 top rows, row 3 has 3 left and 1 right fill
        assert!(y[..24].iter().all(|&p| p == 1));
        assert_eq!(&y[24..32], &[1, 1, 1, 0, 0, 0, 0, 1]);
        // Chroma 4x4: 1 top row, 1 left column, 2x2 interior, remainder right and below
        assert_eq!(&u[..4], &[2; 4]);
        assert_eq!(&u[4..8], &[2, 0, 0, 2]);
        assert_eq!(&u[8..12], &[2, 0, 0, 2]);
        assert_eq!(&u[12..], &[2; 4]);
    }

    #[test]
    fn test_odd_margins_copy_source_on_chroma_grid() {
        let src_y: Vec<u8> = (0..16).collect();
        let src_u = vec![60u8, 61, 62, 63];
        let src_v = vec![70u8, 71, 72, 73];
        let src = Picture::new(&[
            PlaneRef::new(&src_y, 4),
            PlaneRef::new(&src_u, 2),
            PlaneRef::new(&src_v, 2),
        ]);

        let (mut y, mut u, mut v) = (vec![0u8; 8 * 8], vec![0u8; 16], vec![0u8; 16]);
        let mut dst = PictureMut::new(vec![
            PlaneMut::new(&mut y, 8),
            PlaneMut::new(&mut u, 4),
            PlaneMut::new(&mut v, 4),
        ]);
        let margins = Margins { top: 3, bottom: 1, left: 3, right: 1 };
        pad(&mut dst, Some(&src), 8, 8, PixelFormat::Yuv420p, margins, [1, 2, 3]).unwrap();
        drop(dst);

        // Luma interior starts at row 3, column 3
        assert_eq!(&y[24..32], &[1, 1, 1, 0, 1, 2, 3, 1]);
        assert_eq!(&y[48..56], &[1, 1, 1, 12, 13, 14, 15, 1]);
        assert_eq!(&y[56..], &[1; 8]);
        // Chroma interior starts at row 1, column 1 of the 4x4 grid
        assert_eq!(&u[4..8], &[2, 60, 61, 2]);
        assert_eq!(&u[8..12], &[2, 62, 63, 2]);
        assert_eq!(&v[4..8], &[3, 70, 71, 3]);
        assert_eq!(&v[12..], &[3; 4]);
    }

    #[test]
    fn test_nv12_and_16bit_patterns() {
        let (mut y, mut uv) = (vec![0u8; 4 * 4], vec![0u8; 4 * 2]);
        let mut dst = PictureMut::new(vec![PlaneMut::new(&mut y, 4), PlaneMut::new(&mut uv, 4)]);
        pad(&mut dst, None, 4, 4, PixelFormat::Nv12, Margins::uniform(2), [16, 100, 200]).unwrap();
        drop(dst);
        assert_eq!(&uv[..4], &[100, 200, 100, 200]);

        let (mut y, mut u, mut v) = (vec![0u8; 8 * 2], vec![0u8; 4 * 2], vec![0u8; 4 * 2]);
        let mut dst = PictureMut::new(vec![
            PlaneMut::new(&mut y, 8),
            PlaneMut::new(&mut u, 4),
            PlaneMut::new(&mut v, 4),
        ]);
        let margins = Margins { top: 0, bottom: 0, left: 2, right: 0 };
        pad(&mut dst, None, 4, 2, PixelFormat::Yuv422p16be, margins, [0x0102, 0x0304, 0]).unwrap();
        drop(dst);
        assert_eq!(&y[..4], &[1, 2, 1, 2]);
        assert_eq!(&u[..2], &[3, 4]);
    }

    #[test]
    fn test_alpha_plane_is_opaque() {
        let mut planes_data = [vec![0u8; 16], vec![0u8; 4], vec![0u8; 4], vec![0u8; 16]];
        let [y, u, v, a] = &mut planes_data;
        let mut dst = PictureMut::new(vec![
            PlaneMut::new(y, 4),
            PlaneMut::new(u, 2),
            PlaneMut::new(v, 2),
            PlaneMut::new(a, 4),
        ]);
        pad(&mut dst, None, 4, 4, PixelFormat::Yuva420p, Margins::uniform(2), [0, 0, 0]).unwrap();
        drop(dst);
        assert!(planes_data[3].iter().all(|&p| p == 255));
    }

    #[test]
    fn test_rejects_oversized_margins() {
        let mut y = vec![0u8; 16];
        let mut dst = PictureMut::new(vec![PlaneMut::new(&mut y, 4)]);
        let err = pad(&mut dst, None, 4, 4, PixelFormat::Yuv444p, Margins::uniform(3), [0; 3]);
        assert!(matches!(err, Err(OpsError::InvalidDimensions(_))));

        let huge = Margins { top: 0, bottom: 0, left: usize::MAX, right: 2 };
        let err = pad(&mut dst, None, 4, 4, PixelFormat::Yuv444p, huge, [0; 3]);
        assert!(matches!(err, Err(OpsError::InvalidDimensions(_))));
        let huge = Margins { top: usize::MAX, bottom: usize::MAX, left: 0, right: 0 };
        let err = pad(&mut dst, None, 4, 4, PixelFormat::Yuv444p, huge, [0; 3]);
        assert!(matches!(err, Err(OpsError::InvalidDimensions(_))));
    }
}
