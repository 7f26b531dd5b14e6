//! Per-plane geometry of the planar YUV formats.

use pixfmt_core::{chroma_descriptor, ChromaDescriptor, ChromaPlanes, PixelFormat};

use crate::{OpsError, OpsResult};

/// Shape of one plane relative to the luma grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlaneGeometry {
    pub shift_x: u8,
    pub shift_y: u8,
    /// Bytes per pixel of this plane.
    pub pixel_bytes: usize,
}

impl PlaneGeometry {
    /// Byte offset of luma position `(left, top)` in this plane.
    #[inline]
    pub fn offset(&self, stride: usize, top: usize, left: usize) -> usize {
        (top >> self.shift_y) * stride + (left >> self.shift_x) * self.pixel_bytes
    }

    /// Bytes covering `width` luma columns.
    #[inline]
    pub fn row_bytes(&self, width: usize) -> usize {
        (width >> self.shift_x) * self.pixel_bytes
    }
}

/// Descriptor of a planar YUV format, or `UnsupportedFormat`.
pub(crate) fn planar_layout(format: PixelFormat) -> OpsResult<&'static ChromaDescriptor> {
    if !format.descriptor().is_yuv_planar() {
        return Err(OpsError::UnsupportedFormat(format));
    }
    Ok(chroma_descriptor(format))
}

/// Geometry of every plane of `layout`.
pub(crate) fn planes(layout: &ChromaDescriptor) -> impl Iterator<Item = PlaneGeometry> + '_ {
    (0..layout.planes as usize).map(move |i| {
        let (shift_x, shift_y) = layout.plane_shift(i);
        PlaneGeometry {
            shift_x,
            shift_y,
            pixel_bytes: layout.plane_pixel_bytes(i),
        }
    })
}

/// Byte pattern of one pixel of plane `index` filled with `fill`.
///
/// Luma and separate chroma planes take `fill[index]`, interleaved chroma
/// takes the U/V pair in storage order, and alpha planes are opaque.
/// 8-bit planes saturate the value at 255.
pub(crate) fn fill_pattern(layout: &ChromaDescriptor, index: usize, fill: [u16; 3]) -> Vec<u8> {
    let sample = |v: u16| -> Vec<u8> {
        match (layout.sample_bytes, layout.big_endian) {
            (2, true) => v.to_be_bytes().to_vec(),
            (2, false) => v.to_le_bytes().to_vec(),
            _ => vec![v.min(255) as u8],
        }
    };
    if layout.alpha_plane && index + 1 == layout.planes as usize {
        let opaque = if layout.sample_bytes == 2 { u16::MAX } else { 255 };
        return sample(opaque);
    }
    match (layout.chroma, index) {
        (ChromaPlanes::InterleavedUv, 1) => [sample(fill[1]), sample(fill[2])].concat(),
        (ChromaPlanes::InterleavedVu, 1) => [sample(fill[2]), sample(fill[1])].concat(),
        _ => sample(fill[index]),
    }
}
