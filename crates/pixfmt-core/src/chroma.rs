//! Chroma subsampling and plane geometry, the companion to the format table.
//!
//! [`FormatDescriptor`](crate::FormatDescriptor) says *what* a format is; this
//! table says *how its planes are shaped*: the log2 chroma subsampling factors
//! and, for planar formats, how many planes there are and how many bytes a
//! sample takes.
//!
//! ```rust
//! use pixfmt_core::{chroma_subsampling, PixelFormat};
//!
//! assert_eq!(chroma_subsampling(PixelFormat::Yuv420p), (1, 1));
//! assert_eq!(chroma_subsampling(PixelFormat::Yuv411p), (2, 0));
//! assert_eq!(chroma_subsampling(PixelFormat::Rgb24), (0, 0));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PixelFormat;

/// How the chroma samples of a planar format are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChromaPlanes {
    /// No chroma planes (gray) or not a planar format.
    None,
    /// Separate U and V planes.
    Separate,
    /// One plane of interleaved U, V pairs (NV12).
    InterleavedUv,
    /// One plane of interleaved V, U pairs (NV21).
    InterleavedVu,
}

/// Subsampling and plane geometry of one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChromaDescriptor {
    /// log2 of the horizontal chroma subsampling factor.
    pub log2_chroma_w: u8,
    /// log2 of the vertical chroma subsampling factor.
    pub log2_chroma_h: u8,
    /// Number of data planes.
    pub planes: u8,
    /// Bytes per component sample.
    pub sample_bytes: u8,
    /// Multi-byte samples are big endian.
    pub big_endian: bool,
    /// Chroma plane arrangement.
    pub chroma: ChromaPlanes,
    /// Last plane is a full resolution alpha plane.
    pub alpha_plane: bool,
}

impl ChromaDescriptor {
    const fn packed(log2_chroma_w: u8, log2_chroma_h: u8) -> Self {
        Self {
            log2_chroma_w,
            log2_chroma_h,
            planes: 1,
            sample_bytes: 1,
            big_endian: false,
            chroma: ChromaPlanes::None,
            alpha_plane: false,
        }
    }

    const fn yuv(log2_chroma_w: u8, log2_chroma_h: u8) -> Self {
        Self {
            log2_chroma_w,
            log2_chroma_h,
            planes: 3,
            sample_bytes: 1,
            big_endian: false,
            chroma: ChromaPlanes::Separate,
            alpha_plane: false,
        }
    }

    const fn semi(log2_chroma_w: u8, log2_chroma_h: u8, chroma: ChromaPlanes) -> Self {
        Self {
            planes: 2,
            chroma,
            ..Self::yuv(log2_chroma_w, log2_chroma_h)
        }
    }

    const fn gray(sample_bytes: u8, big_endian: bool) -> Self {
        Self {
            sample_bytes,
            big_endian,
            ..Self::packed(0, 0)
        }
    }

    const fn wide(self, big_endian: bool) -> Self {
        Self {
            sample_bytes: 2,
            big_endian,
            ..self
        }
    }

    const fn with_alpha_plane(self) -> Self {
        Self {
            planes: self.planes + 1,
            alpha_plane: true,
            ..self
        }
    }

    /// Shifts `(x, y)` that apply to plane `index`.
    ///
    /// Luma and alpha planes are never subsampled.
    #[inline]
    pub const fn plane_shift(&self, index: usize) -> (u8, u8) {
        if self.is_chroma_plane(index) {
            (self.log2_chroma_w, self.log2_chroma_h)
        } else {
            (0, 0)
        }
    }

    /// Whether plane `index` carries chroma.
    #[inline]
    pub const fn is_chroma_plane(&self, index: usize) -> bool {
        match self.chroma {
            ChromaPlanes::None => false,
            ChromaPlanes::Separate => index == 1 || index == 2,
            ChromaPlanes::InterleavedUv | ChromaPlanes::InterleavedVu => index == 1,
        }
    }

    /// Bytes one pixel of plane `index` occupies.
    #[inline]
    pub const fn plane_pixel_bytes(&self, index: usize) -> usize {
        let interleaved = matches!(
            self.chroma,
            ChromaPlanes::InterleavedUv | ChromaPlanes::InterleavedVu
        );
        if interleaved && index == 1 {
            2 * self.sample_bytes as usize
        } else {
            self.sample_bytes as usize
        }
    }
}

/// Returns `(log2_chroma_w, log2_chroma_h)` of `format`.
#[inline]
pub fn chroma_subsampling(format: PixelFormat) -> (u8, u8) {
    let d = chroma_descriptor(format);
    (d.log2_chroma_w, d.log2_chroma_h)
}

/// Companion descriptor of `format`.
#[inline]
pub fn chroma_descriptor(format: PixelFormat) -> &'static ChromaDescriptor {
    &CHROMA[format as usize]
}

use ChromaPlanes::{InterleavedUv, InterleavedVu};

/// Companion table, indexed by format id.
static CHROMA: [ChromaDescriptor; PixelFormat::COUNT] = [
    /* Yuv420p */ ChromaDescriptor::yuv(1, 1),
    /* Yuyv422 */ ChromaDescriptor::packed(1, 0),
    /* Rgb24 */ ChromaDescriptor::packed(0, 0),
    /* Bgr24 */ ChromaDescriptor::packed(0, 0),
    /* Yuv422p */ ChromaDescriptor::yuv(1, 0),
    /* Yuv444p */ ChromaDescriptor::yuv(0, 0),
    /* Yuv410p */ ChromaDescriptor::yuv(2, 2),
    /* Yuv411p */ ChromaDescriptor::yuv(2, 0),
    /* Gray8 */ ChromaDescriptor::gray(1, false),
    /* MonoWhite */ ChromaDescriptor::packed(0, 0),
    /* MonoBlack */ ChromaDescriptor::packed(0, 0),
    /* Pal8 */ ChromaDescriptor::packed(0, 0),
    /* Yuvj420p */ ChromaDescriptor::yuv(1, 1),
    /* Yuvj422p */ ChromaDescriptor::yuv(1, 0),
    /* Yuvj444p */ ChromaDescriptor::yuv(0, 0),
    /* Uyvy422 */ ChromaDescriptor::packed(1, 0),
    /* Uyyvyy411 */ ChromaDescriptor::packed(2, 0),
    /* Bgr8 */ ChromaDescriptor::packed(0, 0),
    /* Bgr4 */ ChromaDescriptor::packed(0, 0),
    /* Bgr4Byte */ ChromaDescriptor::packed(0, 0),
    /* Rgb8 */ ChromaDescriptor::packed(0, 0),
    /* Rgb4 */ ChromaDescriptor::packed(0, 0),
    /* Rgb4Byte */ ChromaDescriptor::packed(0, 0),
    /* Nv12 */ ChromaDescriptor::semi(1, 1, InterleavedUv),
    /* Nv21 */ ChromaDescriptor::semi(1, 1, InterleavedVu),
    /* Argb */ ChromaDescriptor::packed(0, 0),
    /* Rgba */ ChromaDescriptor::packed(0, 0),
    /* Abgr */ ChromaDescriptor::packed(0, 0),
    /* Bgra */ ChromaDescriptor::packed(0, 0),
    /* Gray16be */ ChromaDescriptor::gray(2, true),
    /* Gray16le */ ChromaDescriptor::gray(2, false),
    /* Yuv440p */ ChromaDescriptor::yuv(0, 1),
    /* Yuvj440p */ ChromaDescriptor::yuv(0, 1),
    /* Yuva420p */ ChromaDescriptor::yuv(1, 1).with_alpha_plane(),
    /* Rgb48be */ ChromaDescriptor::packed(0, 0),
    /* Rgb48le */ ChromaDescriptor::packed(0, 0),
    /* Rgb565be */ ChromaDescriptor::packed(0, 0),
    /* Rgb565le */ ChromaDescriptor::packed(0, 0),
    /* Rgb555be */ ChromaDescriptor::packed(0, 0),
    /* Rgb555le */ ChromaDescriptor::packed(0, 0),
    /* Bgr565be */ ChromaDescriptor::packed(0, 0),
    /* Bgr565le */ ChromaDescriptor::packed(0, 0),
    /* Bgr555be */ ChromaDescriptor::packed(0, 0),
    /* Bgr555le */ ChromaDescriptor::packed(0, 0),
    /* Yuv420p16le */ ChromaDescriptor::yuv(1, 1).wide(false),
    /* Yuv420p16be */ ChromaDescriptor::yuv(1, 1).wide(true),
    /* Yuv422p16le */ ChromaDescriptor::yuv(1, 0).wide(false),
    /* Yuv422p16be */ ChromaDescriptor::yuv(1, 0).wide(true),
    /* Yuv444p16le */ ChromaDescriptor::yuv(0, 0).wide(false),
    /* Yuv444p16be */ ChromaDescriptor::yuv(0, 0).wide(true),
    /* Rgb444le */ ChromaDescriptor::packed(0, 0),
    /* Rgb444be */ ChromaDescriptor::packed(0, 0),
    /* Bgr444le */ ChromaDescriptor::packed(0, 0),
    /* Bgr444be */ ChromaDescriptor::packed(0, 0),
];
