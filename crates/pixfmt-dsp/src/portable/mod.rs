//! Portable reference kernels.
//!
//! Every slot of every table starts out pointing here. The vector backends
//! must reproduce these results bit for bit; the tests cross-check them.

pub mod deinterlace;
pub mod edges;
pub mod fdct;
pub mod idct;
pub mod motion;
pub mod pixels;

/// Clamps to the 8-bit sample range.
#[inline(always)]
pub(crate) fn clip_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
