//! Edge extension for motion compensation past the picture border.

/// Replicate the top row upward.
pub const EDGE_TOP: u32 = 1;
/// Replicate the bottom row downward.
pub const EDGE_BOTTOM: u32 = 2;

/// Extends a `width` x `height` picture by `w` columns on each side and,
/// per `sides`, by `h` rows above and below.
///
/// `origin` is the offset of pixel (0, 0) in `buf`; the margins must fit
/// inside `buf` around it. Left and right margins repeat the first and last
/// pixel of each row; the top and bottom margins then repeat the extended
/// first and last row.
///
/// # Panics
///
/// Panics if a margin falls outside `buf`.
#[allow(clippy::too_many_arguments)]
pub fn draw_edges_8(
    buf: &mut [u8],
    origin: usize,
    stride: usize,
    width: usize,
    height: usize,
    w: usize,
    h: usize,
    sides: u32,
) {
    if width == 0 || height == 0 {
        return;
    }
    for y in 0..height {
        let row = origin + y * stride;
        let first = buf[row];
        let last = buf[row + width - 1];
        buf[row - w..row].fill(first);
        buf[row + width..row + width + w].fill(last);
    }

    let span = width + 2 * w;
    if sides & EDGE_TOP != 0 {
        let top = origin - w;
        for i in 1..=h {
            buf.copy_within(top..top + span, top - i * stride);
        }
    }
    if sides & EDGE_BOTTOM != 0 {
        let bottom = origin + (height - 1) * stride - w;
        for i in 1..=h {
            buf.copy_within(bottom..bottom + span, bottom + i * stride);
        }
    }
}
