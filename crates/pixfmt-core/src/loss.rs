//! Information loss scoring between pixel formats.
//!
//! [`compute_loss`] reports which kinds of information a conversion from
//! `src` to `dst` throws away. The categories are independent and OR-combined
//! into a [`LossMask`]:
//!
//! | Flag          | Set when                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | `DEPTH`       | `dst` has fewer bits per component (or 565 -> 555)              |
//! | `RESOLUTION`  | `dst` subsamples chroma more coarsely                           |
//! | `COLORSPACE`  | `dst` color model cannot represent the `src` model              |
//! | `ALPHA`       | `dst` drops an alpha channel the caller wants kept              |
//! | `COLORQUANT`  | `dst` is paletted and `src` is neither paletted nor gray        |
//! | `CHROMA`      | `dst` is gray and `src` is not                                  |
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{compute_loss, LossMask, PixelFormat};
//!
//! let loss = compute_loss(PixelFormat::Gray8, PixelFormat::Yuv420p, false);
//! assert!(loss.contains(LossMask::COLORSPACE));
//! assert!(loss.contains(LossMask::CHROMA));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chroma::chroma_descriptor;
use crate::format::{ColorModel, Layout};
use crate::PixelFormat;

/// Set of loss categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LossMask(u32);

impl LossMask {
    /// No loss.
    pub const NONE: Self = Self(0);
    /// Loss due to color depth change.
    pub const DEPTH: Self = Self(0x0001);
    /// Loss due to chroma subsampling.
    pub const RESOLUTION: Self = Self(0x0002);
    /// Loss due to color space conversion.
    pub const COLORSPACE: Self = Self(0x0004);
    /// Loss of the alpha channel.
    pub const ALPHA: Self = Self(0x0008);
    /// Loss due to color quantization.
    pub const COLORQUANT: Self = Self(0x0010);
    /// Loss of chroma (e.g. RGB to gray).
    pub const CHROMA: Self = Self(0x0020);
    /// Every category.
    pub const ALL: Self = Self(0x003f);

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds a mask from raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// No category set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every category of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Categories set in `self` but not in `other`.
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Loss that is not covered by `tolerance`.
    ///
    /// A conversion is acceptable at a tolerance level when this is empty.
    #[inline]
    pub const fn exceeds(self, tolerance: Self) -> Self {
        self.difference(tolerance)
    }
}

impl BitOr for LossMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LossMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LossMask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for LossMask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for LossMask {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl fmt::Display for LossMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(LossMask, &str); 6] = [
            (LossMask::DEPTH, "depth"),
            (LossMask::RESOLUTION, "resolution"),
            (LossMask::COLORSPACE, "colorspace"),
            (LossMask::ALPHA, "alpha"),
            (LossMask::COLORQUANT, "colorquant"),
            (LossMask::CHROMA, "chroma"),
        ];
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// 5-6-5 to 5-5-5 narrows green. Nominal depths are both 5, so the depth
/// comparison alone would not see it.
#[inline]
fn is_565_to_555(dst: PixelFormat, src: PixelFormat) -> bool {
    dst.is_555() && src.is_565()
}

/// Whether a `dst` model can represent `src` without a model change.
#[inline]
fn model_tolerates(dst: ColorModel, src: ColorModel) -> bool {
    use ColorModel::*;
    match dst {
        Rgb => matches!(src, Rgb | Gray),
        Gray => src == Gray,
        Yuv => src == Yuv,
        YuvJpeg => matches!(src, YuvJpeg | Yuv | Gray),
    }
}

/// Computes what converting `src` to `dst` loses.
///
/// `want_alpha` says whether the caller needs the source alpha kept; without
/// it, dropping alpha is free.
pub fn compute_loss(dst: PixelFormat, src: PixelFormat, want_alpha: bool) -> LossMask {
    let pf = dst.descriptor();
    let ps = src.descriptor();
    let dst_chroma = chroma_descriptor(dst);
    let src_chroma = chroma_descriptor(src);

    let mut loss = LossMask::NONE;

    if pf.depth < ps.depth || is_565_to_555(dst, src) {
        loss |= LossMask::DEPTH;
    }
    if dst_chroma.log2_chroma_w > src_chroma.log2_chroma_w
        || dst_chroma.log2_chroma_h > src_chroma.log2_chroma_h
    {
        loss |= LossMask::RESOLUTION;
    }
    if !model_tolerates(pf.color, ps.color) {
        loss |= LossMask::COLORSPACE;
    }
    if pf.color == ColorModel::Gray && ps.color != ColorModel::Gray {
        loss |= LossMask::CHROMA;
    }
    if !pf.has_alpha && ps.has_alpha && want_alpha {
        loss |= LossMask::ALPHA;
    }
    if pf.layout == Layout::Palette
        && ps.layout != Layout::Palette
        && ps.color != ColorModel::Gray
    {
        loss |= LossMask::COLORQUANT;
    }

    loss
}
