//! Best output format selection.
//!
//! Given the formats a consumer accepts and the format a producer emits,
//! [`select_best_format`] picks the candidate that loses the least.
//!
//! # Algorithm
//!
//! The search walks a ladder of loss tolerances from strictest to most
//! permissive ([`TOLERANCE_LADDER`]). At each level every candidate whose loss
//! is covered by the tolerance survives; among survivors the one with the
//! lowest [`avg_bits_per_pixel`] wins, ties going to the earliest entry. The
//! first level with a survivor ends the search.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{select_best_format, LossMask, PixelFormat};
//!
//! let best = select_best_format(
//!     &[PixelFormat::Rgb24, PixelFormat::Yuv420p],
//!     PixelFormat::Yuv420p,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(best.format, PixelFormat::Yuv420p);
//! assert_eq!(best.loss, LossMask::NONE);
//! ```

use tracing::{debug, error, warn};

use crate::chroma::chroma_descriptor;
use crate::format::Layout;
use crate::loss::{compute_loss, LossMask};
use crate::{Error, PixelFormat, Result};

/// Maximum number of entries in a candidate list.
pub const MAX_CANDIDATES: usize = 64;

/// Loss tolerances tried in order, strictest first.
pub const TOLERANCE_LADDER: [LossMask; 6] = [
    LossMask::NONE,
    LossMask::ALPHA,
    LossMask::from_bits_truncate(LossMask::ALPHA.bits() | LossMask::RESOLUTION.bits()),
    LossMask::from_bits_truncate(
        LossMask::ALPHA.bits() | LossMask::RESOLUTION.bits() | LossMask::COLORSPACE.bits(),
    ),
    LossMask::from_bits_truncate(
        LossMask::ALPHA.bits()
            | LossMask::RESOLUTION.bits()
            | LossMask::COLORSPACE.bits()
            | LossMask::COLORQUANT.bits(),
    ),
    LossMask::ALL,
];

/// Outcome of a best-format search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Chosen format.
    pub format: PixelFormat,
    /// Full loss of converting the source to `format`.
    pub loss: LossMask,
    /// Tolerance level at which `format` was found.
    pub tolerance: LossMask,
}

/// Average storage cost of one pixel of `format`, in bits.
///
/// Packed 16-bit RGB variants and packed 4:2:2 cost 16 bits, packed 4:1:1
/// costs 12; subsampled planar formats amortize their chroma planes.
pub fn avg_bits_per_pixel(format: PixelFormat) -> u32 {
    use PixelFormat::*;

    let pf = format.descriptor();
    let depth = pf.depth as u32;
    match pf.layout {
        Layout::Packed => match format {
            Yuyv422 | Uyvy422 => 16,
            f if f.is_565() || f.is_555() || f.is_444_rgb() => 16,
            Uyyvyy411 => 12,
            _ => depth * pf.channels as u32,
        },
        Layout::Planar => {
            let c = chroma_descriptor(format);
            if c.log2_chroma_w == 0 && c.log2_chroma_h == 0 {
                depth * pf.channels as u32
            } else {
                depth + ((2 * depth) >> (c.log2_chroma_w + c.log2_chroma_h))
            }
        }
        Layout::Palette => 8,
    }
}

/// Cheapest candidate whose loss is covered by `tolerance`.
fn best_within(
    candidates: &[PixelFormat],
    src: PixelFormat,
    want_alpha: bool,
    tolerance: LossMask,
) -> Option<PixelFormat> {
    let mut best: Option<(PixelFormat, u32)> = None;
    for &fmt in candidates {
        let loss = compute_loss(fmt, src, want_alpha);
        if !loss.exceeds(tolerance).is_empty() {
            continue;
        }
        let bits = avg_bits_per_pixel(fmt);
        if best.is_none_or(|(_, min)| bits < min) {
            best = Some((fmt, bits));
        }
    }
    best.map(|(fmt, _)| fmt)
}

fn check_candidates(candidates: &[PixelFormat]) -> Result<()> {
    if candidates.len() > MAX_CANDIDATES {
        error!(
            len = candidates.len(),
            "Pixel format list longer than expected"
        );
        return Err(Error::malformed_list(format!(
            "{} entries, at most {MAX_CANDIDATES} allowed",
            candidates.len()
        )));
    }
    let mut seen = 0u64;
    for fmt in candidates {
        let bit = 1u64 << fmt.id();
        if seen & bit != 0 {
            error!(format = %fmt, "Pixel format list contains duplicates");
            return Err(Error::malformed_list(format!("duplicate entry {fmt}")));
        }
        seen |= bit;
    }
    Ok(())
}

/// Picks the candidate that converts from `src` with the least loss.
///
/// # Errors
///
/// - [`Error::MalformedCandidateList`] if the list holds more than
///   [`MAX_CANDIDATES`] entries or repeats a format.
/// - [`Error::NoCompatibleFormat`] if no candidate survives (only possible
///   for an empty list, since the last level tolerates everything).
pub fn select_best_format(
    candidates: &[PixelFormat],
    src: PixelFormat,
    want_alpha: bool,
) -> Result<Selection> {
    check_candidates(candidates)?;

    for tolerance in TOLERANCE_LADDER {
        if let Some(format) = best_within(candidates, src, want_alpha, tolerance) {
            let loss = compute_loss(format, src, want_alpha);
            debug!(%src, %format, %loss, "Selected pixel format");
            return Ok(Selection {
                format,
                loss,
                tolerance,
            });
        }
    }

    warn!(%src, candidates = candidates.len(), "No compatible pixel format");
    Err(Error::NoCompatibleFormat { src })
}

/// Raw-id variant: `list` is terminated by [`PixelFormat::NONE_ID`].
///
/// # Errors
///
/// [`Error::MalformedCandidateList`] when no terminator appears within the
/// first `MAX_CANDIDATES + 1` entries or an id is unknown; otherwise as
/// [`select_best_format`].
///
/// # Example
///
/// ```rust
/// use pixfmt_core::{select_best_format_raw, Error, PixelFormat};
///
/// let unterminated = [PixelFormat::Rgb24.id(); 70];
/// let err = select_best_format_raw(&unterminated, PixelFormat::Rgb24, false).unwrap_err();
/// assert!(matches!(err, Error::MalformedCandidateList { .. }));
/// ```
pub fn select_best_format_raw(list: &[u8], src: PixelFormat, want_alpha: bool) -> Result<Selection> {
    let window = &list[..list.len().min(MAX_CANDIDATES + 1)];
    let Some(end) = window.iter().position(|&id| id == PixelFormat::NONE_ID) else {
        error!(
            len = list.len(),
            "Pixel format list is not terminated within {MAX_CANDIDATES} entries"
        );
        return Err(Error::malformed_list("missing terminator"));
    };

    let candidates = list[..end]
        .iter()
        .map(|&id| PixelFormat::try_from(id))
        .collect::<Result<Vec<_>>>()?;
    select_best_format(&candidates, src, want_alpha)
}

/// Legacy variant: bit `i` of `mask` selects the format with id `i`.
///
/// # Errors
///
/// [`Error::MalformedCandidateList`] if a set bit names no known format;
/// otherwise as [`select_best_format`].
pub fn select_best_format_mask(mask: u64, src: PixelFormat, want_alpha: bool) -> Result<Selection> {
    let mut candidates = Vec::with_capacity(mask.count_ones() as usize);
    for i in 0..64u8 {
        if mask & (1u64 << i) != 0 {
            candidates.push(PixelFormat::try_from(i)?);
        }
    }
    select_best_format(&candidates, src, want_alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PixelFormat::*;

    #[test]
    fn test_bits_per_pixel() {
        assert_eq!(avg_bits_per_pixel(Yuv420p), 12);
        assert_eq!(avg_bits_per_pixel(Yuv422p), 16);
        assert_eq!(avg_bits_per_pixel(Yuv444p), 24);
        assert_eq!(avg_bits_per_pixel(Yuv410p), 9);
        assert_eq!(avg_bits_per_pixel(Nv12), 12);
        assert_eq!(avg_bits_per_pixel(Rgb24), 24);
        assert_eq!(avg_bits_per_pixel(Rgba), 32);
        assert_eq!(avg_bits_per_pixel(Rgb565le), 16);
        assert_eq!(avg_bits_per_pixel(Bgr444be), 16);
        assert_eq!(avg_bits_per_pixel(Yuyv422), 16);
        assert_eq!(avg_bits_per_pixel(Uyyvyy411), 12);
        assert_eq!(avg_bits_per_pixel(Pal8), 8);
        assert_eq!(avg_bits_per_pixel(Gray8), 8);
        assert_eq!(avg_bits_per_pixel(MonoWhite), 1);
        assert_eq!(avg_bits_per_pixel(Rgb48be), 48);
    }

    #[test]
    fn test_exact_match_wins() {
        let sel = select_best_format(&[Rgb24, Yuv420p], Yuv420p, false).unwrap();
        assert_eq!(sel.format, Yuv420p);
        assert_eq!(sel.loss, LossMask::NONE);
        assert_eq!(sel.tolerance, LossMask::NONE);
    }

    #[test]
    fn test_565_source_prefers_itself() {
        let sel = select_best_format(&[Rgb555le, Rgb565le], Rgb565le, false).unwrap();
        assert_eq!(sel.format, Rgb565le);
        assert_eq!(sel.loss, LossMask::NONE);
    }

    #[test]
    fn test_only_555_reports_depth_loss() {
        let sel = select_best_format(&[Rgb555le], Rgb565le, false).unwrap();
        assert_eq!(sel.format, Rgb555le);
        assert_eq!(sel.loss, LossMask::DEPTH);
    }

    #[test]
    fn test_cheapest_lossless_candidate() {
        // All three hold gray losslessly; gray8 is the cheapest.
        let sel = select_best_format(&[Rgb24, Yuvj444p, Gray8], Gray8, false).unwrap();
        assert_eq!(sel.format, Gray8);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let sel = select_best_format(&[Bgr24, Rgb24], Rgb24, false).unwrap();
        assert_eq!(sel.format, Bgr24);
        let sel = select_best_format(&[Rgb24, Bgr24], Bgr24, false).unwrap();
        assert_eq!(sel.format, Rgb24);
    }

    #[test]
    fn test_alpha_dropped_before_resolution() {
        // rgba source with alpha wanted: rgb24 only loses alpha,
        // yuv420p loses resolution and colorspace too.
        let sel = select_best_format(&[Yuv420p, Rgb24], Rgba, true).unwrap();
        assert_eq!(sel.format, Rgb24);
        assert_eq!(sel.loss, LossMask::ALPHA);
        assert_eq!(sel.tolerance, LossMask::ALPHA);
    }

    #[test]
    fn test_depth_is_last_resort() {
        let sel = select_best_format(&[Gray8, Pal8], Rgb48le, false).unwrap();
        // pal8 loses depth and quantizes, gray8 loses depth and chroma:
        // both only pass the final level at 8 bits, so the first one wins.
        assert_eq!(sel.tolerance, LossMask::ALL);
        assert_eq!(sel.format, Gray8);
    }

    #[test]
    fn test_empty_list() {
        let err = select_best_format(&[], Rgb24, false).unwrap_err();
        assert_eq!(err, Error::NoCompatibleFormat { src: Rgb24 });
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = select_best_format(&[Rgb24, Gray8, Rgb24], Rgb24, false).unwrap_err();
        assert!(matches!(err, Error::MalformedCandidateList { .. }));
    }

    #[test]
    fn test_raw_list() {
        let list = [Rgb24.id(), Yuv420p.id(), PixelFormat::NONE_ID];
        let sel = select_best_format_raw(&list, Yuv420p, false).unwrap();
        assert_eq!(sel.format, Yuv420p);

        // Format id 0 is a real answer, not a sentinel.
        let list = [Yuv420p.id(), PixelFormat::NONE_ID];
        let sel = select_best_format_raw(&list, Yuv420p, false).unwrap();
        assert_eq!(sel.format.id(), 0);
    }

    #[test]
    fn test_raw_list_unterminated() {
        let list: Vec<u8> = (0..64u8).map(|i| i % PixelFormat::COUNT as u8).collect();
        let err = select_best_format_raw(&list, Rgb24, false).unwrap_err();
        assert!(matches!(err, Error::MalformedCandidateList { .. }));

        // Terminator past the 65th slot is out of reach.
        let mut list = vec![Rgb24.id(); 65];
        list.push(PixelFormat::NONE_ID);
        assert!(select_best_format_raw(&list, Rgb24, false).is_err());
    }

    #[test]
    fn test_raw_list_unknown_id() {
        let list = [Rgb24.id(), 99, PixelFormat::NONE_ID];
        let err = select_best_format_raw(&list, Rgb24, false).unwrap_err();
        assert!(matches!(err, Error::MalformedCandidateList { .. }));
    }

    #[test]
    fn test_mask_variant() {
        let mask = (1u64 << Rgb24.id()) | (1u64 << Yuv420p.id());
        let sel = select_best_format_mask(mask, Yuv420p, false).unwrap();
        assert_eq!(sel.format, Yuv420p);

        let err = select_best_format_mask(1u64 << 63, Yuv420p, false).unwrap_err();
        assert!(matches!(err, Error::MalformedCandidateList { .. }));

        let err = select_best_format_mask(0, Yuv420p, false).unwrap_err();
        assert!(matches!(err, Error::NoCompatibleFormat { .. }));
    }

    #[test]
    fn test_selection_is_minimal_and_within_tolerance() {
        let candidates = [Rgb24, Yuv420p, Yuv444p, Gray8, Pal8, Rgba, Rgb565le, Yuyv422, Nv12];
        for src in PixelFormat::ALL {
            for want_alpha in [false, true] {
                let sel = select_best_format(&candidates, src, want_alpha).unwrap();
                assert!(sel.loss.exceeds(sel.tolerance).is_empty(), "{src}");
                let bits = avg_bits_per_pixel(sel.format);
                for &c in &candidates {
                    if compute_loss(c, src, want_alpha).exceeds(sel.tolerance).is_empty() {
                        assert!(avg_bits_per_pixel(c) >= bits, "{src}: {c} is cheaper");
                    }
                }
            }
        }
    }
}
