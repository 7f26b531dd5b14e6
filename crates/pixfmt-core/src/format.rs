//! Pixel format ids and the per-format descriptor table.
//!
//! This module provides the canonical definitions for pixel formats used
//! across all pixfmt crates.
//!
//! # Types
//!
//! - [`PixelFormat`] - Enumerated format id (stable `u8` discriminants)
//! - [`ColorModel`] - RGB, gray, studio-range YUV or full-range YUV
//! - [`Layout`] - Planar, packed or paletted storage
//! - [`FormatDescriptor`] - Channel count, model, layout, depth and alpha
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::format::{ColorModel, Layout, PixelFormat};
//!
//! let desc = PixelFormat::Yuv420p.descriptor();
//! assert_eq!(desc.channels, 3);
//! assert_eq!(desc.color, ColorModel::Yuv);
//! assert_eq!(desc.layout, Layout::Planar);
//! assert_eq!(desc.depth, 8);
//! ```
//!
//! The table is plain data: a `static` array indexed by [`PixelFormat::id`].
//! Chroma subsampling lives in the companion [`crate::chroma`] table.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color model of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorModel {
    /// RGB color space.
    Rgb,
    /// Gray (luma only).
    Gray,
    /// YUV, studio range: 16 <= Y <= 235, 16 <= U, V <= 240.
    Yuv,
    /// YUV, full range: 0 <= Y, U, V <= 255 (JPEG).
    YuvJpeg,
}

/// Storage layout of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// Each channel lives in its own plane.
    Planar,
    /// All channels interleaved in one plane.
    Packed,
    /// One plane of indexes into a palette.
    Palette,
}

/// Static metadata for one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatDescriptor {
    /// Number of channels, alpha included.
    pub channels: u8,
    /// Color model.
    pub color: ColorModel,
    /// Storage layout.
    pub layout: Layout,
    /// Bit depth of the color components.
    pub depth: u8,
    /// Whether the format carries alpha.
    pub has_alpha: bool,
}

impl FormatDescriptor {
    const fn new(channels: u8, color: ColorModel, layout: Layout, depth: u8) -> Self {
        Self {
            channels,
            color,
            layout,
            depth,
            has_alpha: false,
        }
    }

    const fn alpha(self) -> Self {
        Self {
            has_alpha: true,
            ..self
        }
    }

    /// Planar studio or full range YUV.
    #[inline]
    pub const fn is_yuv_planar(&self) -> bool {
        matches!(self.color, ColorModel::Yuv | ColorModel::YuvJpeg)
            && matches!(self.layout, Layout::Planar)
    }
}

/// Pixel format id.
///
/// Discriminants are stable: ids below 64 map to bit positions of the
/// legacy format mask accepted by [`crate::select::select_best_format_mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PixelFormat {
    Yuv420p = 0,
    Yuyv422 = 1,
    Rgb24 = 2,
    Bgr24 = 3,
    Yuv422p = 4,
    Yuv444p = 5,
    Yuv410p = 6,
    Yuv411p = 7,
    Gray8 = 8,
    MonoWhite = 9,
    MonoBlack = 10,
    Pal8 = 11,
    Yuvj420p = 12,
    Yuvj422p = 13,
    Yuvj444p = 14,
    Uyvy422 = 15,
    Uyyvyy411 = 16,
    Bgr8 = 17,
    Bgr4 = 18,
    Bgr4Byte = 19,
    Rgb8 = 20,
    Rgb4 = 21,
    Rgb4Byte = 22,
    Nv12 = 23,
    Nv21 = 24,
    Argb = 25,
    Rgba = 26,
    Abgr = 27,
    Bgra = 28,
    Gray16be = 29,
    Gray16le = 30,
    Yuv440p = 31,
    Yuvj440p = 32,
    Yuva420p = 33,
    Rgb48be = 34,
    Rgb48le = 35,
    Rgb565be = 36,
    Rgb565le = 37,
    Rgb555be = 38,
    Rgb555le = 39,
    Bgr565be = 40,
    Bgr565le = 41,
    Bgr555be = 42,
    Bgr555le = 43,
    Yuv420p16le = 44,
    Yuv420p16be = 45,
    Yuv422p16le = 46,
    Yuv422p16be = 47,
    Yuv444p16le = 48,
    Yuv444p16be = 49,
    Rgb444le = 50,
    Rgb444be = 51,
    Bgr444le = 52,
    Bgr444be = 53,
}

impl PixelFormat {
    /// Number of known formats.
    pub const COUNT: usize = 54;

    /// Raw id reserved for "no format"; terminates raw candidate lists.
    pub const NONE_ID: u8 = u8::MAX;

    /// Every format, in id order.
    pub const ALL: [PixelFormat; Self::COUNT] = {
        use PixelFormat::*;
        [
            Yuv420p, Yuyv422, Rgb24, Bgr24, Yuv422p, Yuv444p, Yuv410p, Yuv411p, Gray8,
            MonoWhite, MonoBlack, Pal8, Yuvj420p, Yuvj422p, Yuvj444p, Uyvy422, Uyyvyy411,
            Bgr8, Bgr4, Bgr4Byte, Rgb8, Rgb4, Rgb4Byte, Nv12, Nv21, Argb, Rgba, Abgr, Bgra,
            Gray16be, Gray16le, Yuv440p, Yuvj440p, Yuva420p, Rgb48be, Rgb48le, Rgb565be,
            Rgb565le, Rgb555be, Rgb555le, Bgr565be, Bgr565le, Bgr555be, Bgr555le,
            Yuv420p16le, Yuv420p16be, Yuv422p16le, Yuv422p16be, Yuv444p16le, Yuv444p16be,
            Rgb444le, Rgb444be, Bgr444le, Bgr444be,
        ]
    };

    /// Raw id of this format.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks a format up by raw id. Returns `None` for the sentinel and
    /// for unknown ids.
    ///
    /// # Example
    /// ```rust
    /// use pixfmt_core::PixelFormat;
    /// assert_eq!(PixelFormat::from_id(8), Some(PixelFormat::Gray8));
    /// assert_eq!(PixelFormat::from_id(PixelFormat::NONE_ID), None);
    /// ```
    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Static descriptor of this format.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Lowercase short name, as used in logs.
    pub const fn name(self) -> &'static str {
        use PixelFormat::*;
        match self {
            Yuv420p => "yuv420p",
            Yuyv422 => "yuyv422",
            Rgb24 => "rgb24",
            Bgr24 => "bgr24",
            Yuv422p => "yuv422p",
            Yuv444p => "yuv444p",
            Yuv410p => "yuv410p",
            Yuv411p => "yuv411p",
            Gray8 => "gray",
            MonoWhite => "monow",
            MonoBlack => "monob",
            Pal8 => "pal8",
            Yuvj420p => "yuvj420p",
            Yuvj422p => "yuvj422p",
            Yuvj444p => "yuvj444p",
            Uyvy422 => "uyvy422",
            Uyyvyy411 => "uyyvyy411",
            Bgr8 => "bgr8",
            Bgr4 => "bgr4",
            Bgr4Byte => "bgr4_byte",
            Rgb8 => "rgb8",
            Rgb4 => "rgb4",
            Rgb4Byte => "rgb4_byte",
            Nv12 => "nv12",
            Nv21 => "nv21",
            Argb => "argb",
            Rgba => "rgba",
            Abgr => "abgr",
            Bgra => "bgra",
            Gray16be => "gray16be",
            Gray16le => "gray16le",
            Yuv440p => "yuv440p",
            Yuvj440p => "yuvj440p",
            Yuva420p => "yuva420p",
            Rgb48be => "rgb48be",
            Rgb48le => "rgb48le",
            Rgb565be => "rgb565be",
            Rgb565le => "rgb565le",
            Rgb555be => "rgb555be",
            Rgb555le => "rgb555le",
            Bgr565be => "bgr565be",
            Bgr565le => "bgr565le",
            Bgr555be => "bgr555be",
            Bgr555le => "bgr555le",
            Yuv420p16le => "yuv420p16le",
            Yuv420p16be => "yuv420p16be",
            Yuv422p16le => "yuv422p16le",
            Yuv422p16be => "yuv422p16be",
            Yuv444p16le => "yuv444p16le",
            Yuv444p16be => "yuv444p16be",
            Rgb444le => "rgb444le",
            Rgb444be => "rgb444be",
            Bgr444le => "bgr444le",
            Bgr444be => "bgr444be",
        }
    }

    /// RGB/BGR 5-6-5 formats.
    #[inline]
    pub const fn is_565(self) -> bool {
        use PixelFormat::*;
        matches!(self, Rgb565be | Rgb565le | Bgr565be | Bgr565le)
    }

    /// RGB/BGR 5-5-5 formats.
    #[inline]
    pub const fn is_555(self) -> bool {
        use PixelFormat::*;
        matches!(self, Rgb555be | Rgb555le | Bgr555be | Bgr555le)
    }

    /// RGB/BGR 4-4-4 formats.
    #[inline]
    pub const fn is_444_rgb(self) -> bool {
        use PixelFormat::*;
        matches!(self, Rgb444be | Rgb444le | Bgr444be | Bgr444le)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = crate::Error;

    fn try_from(id: u8) -> crate::Result<Self> {
        Self::from_id(id).ok_or_else(|| crate::Error::malformed_list(format!("unknown format id {id}")))
    }
}

use ColorModel::{Gray, Rgb, Yuv, YuvJpeg};
use Layout::{Packed, Palette, Planar};

/// Descriptor table, indexed by format id.
static DESCRIPTORS: [FormatDescriptor; PixelFormat::COUNT] = [
    /* Yuv420p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Yuyv422 */ FormatDescriptor::new(1, Yuv, Packed, 8),
    /* Rgb24 */ FormatDescriptor::new(3, Rgb, Packed, 8),
    /* Bgr24 */ FormatDescriptor::new(3, Rgb, Packed, 8),
    /* Yuv422p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Yuv444p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Yuv410p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Yuv411p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Gray8 */ FormatDescriptor::new(1, Gray, Planar, 8),
    /* MonoWhite */ FormatDescriptor::new(1, Gray, Planar, 1),
    /* MonoBlack */ FormatDescriptor::new(1, Gray, Planar, 1),
    /* Pal8 */ FormatDescriptor::new(4, Rgb, Palette, 8).alpha(),
    /* Yuvj420p */ FormatDescriptor::new(3, YuvJpeg, Planar, 8),
    /* Yuvj422p */ FormatDescriptor::new(3, YuvJpeg, Planar, 8),
    /* Yuvj444p */ FormatDescriptor::new(3, YuvJpeg, Planar, 8),
    /* Uyvy422 */ FormatDescriptor::new(1, Yuv, Packed, 8),
    /* Uyyvyy411 */ FormatDescriptor::new(1, Yuv, Packed, 8),
    /* Bgr8 */ FormatDescriptor::new(1, Rgb, Packed, 8),
    /* Bgr4 */ FormatDescriptor::new(1, Rgb, Packed, 4),
    /* Bgr4Byte */ FormatDescriptor::new(1, Rgb, Packed, 8),
    /* Rgb8 */ FormatDescriptor::new(1, Rgb, Packed, 8),
    /* Rgb4 */ FormatDescriptor::new(1, Rgb, Packed, 4),
    /* Rgb4Byte */ FormatDescriptor::new(1, Rgb, Packed, 8),
    /* Nv12 */ FormatDescriptor::new(2, Yuv, Planar, 8),
    /* Nv21 */ FormatDescriptor::new(2, Yuv, Planar, 8),
    /* Argb */ FormatDescriptor::new(4, Rgb, Packed, 8).alpha(),
    /* Rgba */ FormatDescriptor::new(4, Rgb, Packed, 8).alpha(),
    /* Abgr */ FormatDescriptor::new(4, Rgb, Packed, 8).alpha(),
    /* Bgra */ FormatDescriptor::new(4, Rgb, Packed, 8).alpha(),
    /* Gray16be */ FormatDescriptor::new(1, Gray, Planar, 16),
    /* Gray16le */ FormatDescriptor::new(1, Gray, Planar, 16),
    /* Yuv440p */ FormatDescriptor::new(3, Yuv, Planar, 8),
    /* Yuvj440p */ FormatDescriptor::new(3, YuvJpeg, Planar, 8),
    // Alpha plane is not flagged: only packed RGB and PAL8 report alpha.
    /* Yuva420p */ FormatDescriptor::new(4, Yuv, Planar, 8),
    /* Rgb48be */ FormatDescriptor::new(3, Rgb, Packed, 16),
    /* Rgb48le */ FormatDescriptor::new(3, Rgb, Packed, 16),
    /* Rgb565be */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Rgb565le */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Rgb555be */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Rgb555le */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Bgr565be */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Bgr565le */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Bgr555be */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Bgr555le */ FormatDescriptor::new(3, Rgb, Packed, 5),
    /* Yuv420p16le */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Yuv420p16be */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Yuv422p16le */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Yuv422p16be */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Yuv444p16le */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Yuv444p16be */ FormatDescriptor::new(3, Yuv, Planar, 16),
    /* Rgb444le */ FormatDescriptor::new(3, Rgb, Packed, 4),
    /* Rgb444be */ FormatDescriptor::new(3, Rgb, Packed, 4),
    /* Bgr444le */ FormatDescriptor::new(3, Rgb, Packed, 4),
    /* Bgr444be */ FormatDescriptor::new(3, Rgb, Packed, 4),
];
