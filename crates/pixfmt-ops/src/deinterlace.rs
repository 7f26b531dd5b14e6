//! Field interpolation for interlaced pictures.
//!
//! Even rows are kept; each odd row is rebuilt from its vertical
//! neighbourhood with the 5-tap line filter of [`PlaneDsp`]. Rows above the
//! top repeat row 0 and rows past the bottom repeat the last row. The row two
//! above an odd row is always the *original* previous odd row, so the
//! in-place variant keeps one scratch row holding it.
//!
//! Both variants run the same per-plane routine; only the write target differs.

use pixfmt_core::{chroma_descriptor, Picture, PictureMut, PixelFormat, PlaneMut, PlaneRef};
use pixfmt_dsp::PlaneDsp;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{OpsError, OpsResult};

/// Formats the deinterlacer accepts.
pub const DEINTERLACE_FORMATS: [PixelFormat; 8] = [
    PixelFormat::Gray8,
    PixelFormat::Yuv420p,
    PixelFormat::Yuvj420p,
    PixelFormat::Yuv422p,
    PixelFormat::Yuvj422p,
    PixelFormat::Yuv444p,
    PixelFormat::Yuvj444p,
    PixelFormat::Yuv411p,
];

/// Where the filtered rows go.
enum Target<'a, 'b> {
    /// Separate destination plane.
    Copy {
        dst: &'a mut PlaneMut<'b>,
        src: PlaneRef<'a>,
    },
    /// The plane itself.
    InPlace(&'a mut PlaneMut<'b>),
}

/// Plane sizes for `format` at `width` x `height`.
fn plane_sizes(format: PixelFormat, width: usize, height: usize) -> OpsResult<Vec<(usize, usize)>> {
    if !DEINTERLACE_FORMATS.contains(&format) {
        return Err(OpsError::UnsupportedFormat(format));
    }
    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "{width}x{height}: deinterlace needs non-zero multiples of 4"
        )));
    }
    let layout = chroma_descriptor(format);
    Ok((0..layout.planes as usize)
        .map(|i| {
            let (sx, sy) = layout.plane_shift(i);
            (width >> sx, height >> sy)
        })
        .collect())
}

/// Deinterlaces `src` into `dst` with the portable kernels.
///
/// # Errors
///
/// - [`OpsError::UnsupportedFormat`] outside [`DEINTERLACE_FORMATS`]
/// - [`OpsError::InvalidDimensions`] unless both sizes are non-zero multiples of 4
/// - [`OpsError::BufferTooSmall`] if a plane is missing or short
pub fn deinterlace(
    dst: &mut PictureMut<'_>,
    src: &Picture<'_>,
    format: PixelFormat,
    width: usize,
    height: usize,
) -> OpsResult<()> {
    deinterlace_with(&PlaneDsp::default(), dst, src, format, width, height)
}

/// Deinterlaces `pic` in place with the portable kernels.
///
/// # Errors
///
/// Same as [`deinterlace`].
pub fn deinterlace_in_place(pic: &mut PictureMut<'_>, format: PixelFormat, width: usize, height: usize) -> OpsResult<()> {
    deinterlace_in_place_with(&PlaneDsp::default(), pic, format, width, height)
}

pub(crate) fn deinterlace_with(
    dsp: &PlaneDsp,
    dst: &mut PictureMut<'_>,
    src: &Picture<'_>,
    format: PixelFormat,
    width: usize,
    height: usize,
) -> OpsResult<()> {
    let sizes = plane_sizes(format, width, height)?;
    trace!(%format, width, height, "deinterlace");

    let sources = (0..sizes.len())
        .map(|i| src.require_plane(i))
        .collect::<Result<Vec<_>, _>>()?;
    let targets = dst.planes_mut(sizes.len())?;
    let jobs: Vec<_> = sizes.into_iter().zip(sources).zip(targets).enumerate().collect();

    #[cfg(feature = "parallel")]
    let jobs = jobs.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let mut jobs = jobs.into_iter();

    jobs.try_for_each(|(index, (((w, h), src), dst))| {
        deinterlace_plane(dsp, index, Target::Copy { dst, src }, w, h)
    })
}

pub(crate) fn deinterlace_in_place_with(
    dsp: &PlaneDsp,
    pic: &mut PictureMut<'_>,
    format: PixelFormat,
    width: usize,
    height: usize,
) -> OpsResult<()> {
    let sizes = plane_sizes(format, width, height)?;
    trace!(%format, width, height, "deinterlace_in_place");

    let targets = pic.planes_mut(sizes.len())?;
    let jobs: Vec<_> = sizes.into_iter().zip(targets).enumerate().collect();

    #[cfg(feature = "parallel")]
    let jobs = jobs.into_par_iter();
    #[cfg(not(feature = "parallel"))]
    let mut jobs = jobs.into_iter();

    jobs.try_for_each(|(index, ((w, h), plane))| {
        deinterlace_plane(dsp, index, Target::InPlace(plane), w, h)
    })
}

/// Filters one `width` x `height` plane into `target`.
fn deinterlace_plane(dsp: &PlaneDsp, index: usize, target: Target<'_, '_>, width: usize, height: usize) -> OpsResult<()> {
    match target {
        Target::Copy { dst, src } => {
            src.require(index, width, height)?;
            dst.require(index, width, height)?;
            let row = |y: usize| src.row(y, width);

            let mut prev_odd = row(0);
            for y in (0..height - 2).step_by(2) {
                dst.row_mut(y, width).copy_from_slice(row(y));
                let rows = [prev_odd, row(y), row(y + 1), row(y + 2), row(y + 3)];
                (dsp.deinterlace_line)(dst.row_mut(y + 1, width), rows, width);
                prev_odd = row(y + 1);
            }
            let y = height - 2;
            dst.row_mut(y, width).copy_from_slice(row(y));
            let last = row(y + 1);
            (dsp.deinterlace_line)(dst.row_mut(y + 1, width), [prev_odd, row(y), last, last, last], width);
        }
        Target::InPlace(plane) => {
            plane.require(index, width, height)?;
            let stride = plane.stride();
            let data = plane.data_mut();
            let mut saved = data[..width].to_vec();

            for y in (1..height - 1).step_by(2) {
                let (head, tail) = data.split_at_mut(y * stride);
                let (cur, rest) = tail.split_at_mut(stride);
                let above = &head[(y - 1) * stride..][..width];
                let below = [&rest[..width], &rest[stride..stride + width]];
                (dsp.deinterlace_line_inplace)(&mut saved, above, &mut cur[..width], Some(below), width);
            }
            let y = height - 1;
            let (head, tail) = data.split_at_mut(y * stride);
            let above = &head[(y - 1) * stride..][..width];
            (dsp.deinterlace_line_inplace)(&mut saved, above, &mut tail[..width], None, width);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Vec<u8> {
        (0..height).flat_map(|y| (0..width).map(move |x| (x, y))).map(|(x, y)| f(x, y)).collect()
    }

    #[test]
    fn test_flat_gray_unchanged() {
        let src = vec![100u8; 16];
        let mut out = vec![0u8; 16];
        let mut dst = PictureMut::new(vec![PlaneMut::new(&mut out, 4)]);
        deinterlace(&mut dst, &Picture::new(&[PlaneRef::new(&src, 4)]), PixelFormat::Gray8, 4, 4).unwrap();
        drop(dst);
        assert_eq!(out, src);
    }

    #[test]
    fn test_odd_row_formula() {
        // Rows 0..4 hold 0, 40, 80, 120; odd rows get filtered
        let src = gray(4, 4, |_, y| (y * 40) as u8);
        let mut out = vec![0u8; 16];
        let mut dst = PictureMut::new(vec![PlaneMut::new(&mut out, 4)]);
        deinterlace(&mut dst, &Picture::new(&[PlaneRef::new(&src, 4)]), PixelFormat::Gray8, 4, 4).unwrap();
        drop(dst);
        // Row 1: (-0 + 4*0 + 2*40 + 4*80 - 120 + 4) >> 3 = 35
        assert_eq!(out[4], 35);
        // Row 3: (-40 + 4*80 + 2*120 + 4*120 - 120 + 4) >> 3 = 110
        assert_eq!(out[12], 110);
        assert_eq!(out[8], 80);
    }

    #[test]
    fn test_in_place_matches_copy() {
        let (w, h) = (8, 12);
        let src = gray(w, h, |x, y| ((x * 29 + y * 53 + x * y) % 256) as u8);
        let mut copied = vec![0u8; w * h];
        let mut dst = PictureMut::new(vec![PlaneMut::new(&mut copied, w)]);
        deinterlace(&mut dst, &Picture::new(&[PlaneRef::new(&src, w)]), PixelFormat::Gray8, w, h).unwrap();
        drop(dst);

        let mut in_place = src.clone();
        let mut pic = PictureMut::new(vec![PlaneMut::new(&mut in_place, w)]);
        deinterlace_in_place(&mut pic, PixelFormat::Gray8, w, h).unwrap();
        drop(pic);
        assert_eq!(in_place, copied);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut buf = vec![0u8; 64];
        let mut pic = PictureMut::new(vec![PlaneMut::new(&mut buf, 8)]);
        assert_eq!(
            deinterlace_in_place(&mut pic, PixelFormat::Rgb24, 8, 8),
            Err(OpsError::UnsupportedFormat(PixelFormat::Rgb24))
        );
        assert!(matches!(
            deinterlace_in_place(&mut pic, PixelFormat::Gray8, 6, 8),
            Err(OpsError::InvalidDimensions(_))
        ));
        assert!(matches!(
            deinterlace_in_place(&mut pic, PixelFormat::Gray8, 0, 8),
            Err(OpsError::InvalidDimensions(_))
        ));
        assert!(matches!(
            deinterlace_in_place(&mut pic, PixelFormat::Yuv420p, 8, 8),
            Err(OpsError::BufferTooSmall { plane: 1, .. })
        ));
    }
}
