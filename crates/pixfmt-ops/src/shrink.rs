//! Box-filter downscaling by 2, 4 and 8 in both directions.
//!
//! `width` and `height` are the output size. Each output sample is the
//! rounded mean of its `N x N` source block: `(sum + N*N/2) >> log2(N*N)`.
//! Slices too short for the requested geometry panic.

use tracing::trace;

/// Halves a plane in both directions.
pub fn shrink22(dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
    trace!(width, height, "shrink22");
    let body = width & !3;
    for y in 0..height {
        let s1 = &src[2 * y * src_stride..];
        let s2 = &src[(2 * y + 1) * src_stride..];
        let d = &mut dst[y * dst_stride..y * dst_stride + width];

        let mut x = 0;
        while x < body {
            for k in 0..4 {
                let i = 2 * (x + k);
                d[x + k] = ((s1[i] as u32 + s1[i + 1] as u32 + s2[i] as u32 + s2[i + 1] as u32 + 2) >> 2) as u8;
            }
            x += 4;
        }
        for x in body..width {
            let i = 2 * x;
            d[x] = ((s1[i] as u32 + s1[i + 1] as u32 + s2[i] as u32 + s2[i + 1] as u32 + 2) >> 2) as u8;
        }
    }
}

fn shrink_box<const N: usize, const SHIFT: u32>(
    dst: &mut [u8],
    dst_stride: usize,
    src: &[u8],
    src_stride: usize,
    width: usize,
    height: usize,
) {
    let round = 1u32 << (SHIFT - 1);
    for y in 0..height {
        let d = &mut dst[y * dst_stride..y * dst_stride + width];
        for (x, out) in d.iter_mut().enumerate() {
            let mut sum = 0u32;
            for j in 0..N {
                let row = &src[(N * y + j) * src_stride + N * x..][..N];
                sum += row.iter().map(|&p| p as u32).sum::<u32>();
            }
            *out = ((sum + round) >> SHIFT) as u8;
        }
    }
}

/// Quarters a plane in both directions.
pub fn shrink44(dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
    trace!(width, height, "shrink44");
    shrink_box::<4, 4>(dst, dst_stride, src, src_stride, width, height);
}

/// Reduces a plane by 8 in both directions.
pub fn shrink88(dst: &mut [u8], dst_stride: usize, src: &[u8], src_stride: usize, width: usize, height: usize) {
    trace!(width, height, "shrink88");
    shrink_box::<8, 6>(dst, dst_stride, src, src_stride, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_box(n: usize, src: &[u8], src_stride: usize, width: usize, height: usize) -> Vec<u8> {
        let area = (n * n) as u32;
        let mut out = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let mut sum = 0u32;
                for j in 0..n {
                    for i in 0..n {
                        sum += src[(n * y + j) * src_stride + n * x + i] as u32;
                    }
                }
                out.push(((sum + area / 2) / area) as u8);
            }
        }
        out
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 37 + i / 7) % 256) as u8).collect()
    }

    #[test]
    fn test_uniform_is_preserved() {
        let src = vec![100u8; 64 * 64];
        let mut dst = vec![0u8; 32 * 32];
        shrink22(&mut dst, 32, &src, 64, 32, 32);
        assert!(dst.iter().all(|&p| p == 100));
        shrink44(&mut dst, 16, &src, 64, 16, 16);
        assert!(dst[..16 * 16].iter().all(|&p| p == 100));
        shrink88(&mut dst, 8, &src, 64, 8, 8);
        assert!(dst[..64].iter().all(|&p| p == 100));
    }

    #[test]
    fn test_shrink22_unrolled_matches_scalar() {
        // Widths around the unroll boundary
        for width in 1..=11 {
            let src_stride = 2 * width + 3;
            let src = pattern(src_stride * 6);
            let mut dst = vec![0u8; width * 3];
            shrink22(&mut dst, width, &src, src_stride, width, 3);
            assert_eq!(dst, scalar_box(2, &src, src_stride, width, 3), "width {width}");
        }
    }

    #[test]
    fn test_shrink44_and_88_match_scalar() {
        let src = pattern(40 * 40);
        let mut dst = vec![0u8; 10 * 10];
        shrink44(&mut dst, 10, &src, 40, 10, 10);
        assert_eq!(dst, scalar_box(4, &src, 40, 10, 10));

        let mut dst = vec![0u8; 5 * 5];
        shrink88(&mut dst, 5, &src, 40, 5, 5);
        assert_eq!(dst, scalar_box(8, &src, 40, 5, 5));
    }

    #[test]
    fn test_rounding() {
        // 1 + 1 + 1 + 2 = 5 -> (5 + 2) >> 2 = 1
        let src = [1u8, 1, 1, 2];
        let mut dst = [0u8; 1];
        shrink22(&mut dst, 1, &src, 2, 1, 1);
        assert_eq!(dst[0], 1);
        // 1 + 2 + 2 + 2 = 7 -> 2
        let src = [1u8, 2, 2, 2];
        shrink22(&mut dst, 1, &src, 2, 1, 1);
        assert_eq!(dst[0], 2);
    }

    #[test]
    #[should_panic]
    fn test_short_source_panics() {
        let src = [0u8; 6];
        let mut dst = [0u8; 2];
        shrink22(&mut dst, 2, &src, 4, 2, 1);
    }
}
