//! Fixed-point separable inverse DCT.
//!
//! Input coefficients are in natural (row-major) order and orthonormally
//! scaled, valid over `-2048..=2047`. Each output sample is a double sum over
//! a 13-bit basis matrix: the row pass keeps two fraction bits, the column
//! pass rounds them away.

use super::pixels::{add_pixels_clamped, put_pixels_clamped};

pub(crate) const ROW_SHIFT: i32 = 11;
pub(crate) const COL_SHIFT: i32 = 15;

/// `IDCT_BASIS[k][n] = round(8192 * c(k) / 2 * cos((2n + 1) k pi / 16))`.
pub(crate) const IDCT_BASIS: [[i32; 8]; 8] = [
    [2896, 2896, 2896, 2896, 2896, 2896, 2896, 2896],
    [4017, 3406, 2276, 799, -799, -2276, -3406, -4017],
    [3784, 1567, -1567, -3784, -3784, -1567, 1567, 3784],
    [3406, -799, -4017, -2276, 2276, 4017, 799, -3406],
    [2896, -2896, -2896, 2896, 2896, -2896, -2896, 2896],
    [2276, -4017, 799, 3406, -3406, -799, 4017, -2276],
    [1567, -3784, 3784, -1567, -1567, 3784, -3784, 1567],
    [799, -2276, 3406, -4017, 4017, -3406, 2276, -799],
];

/// Inverse DCT of a natural-order block in place.
pub fn idct_int(block: &mut [i16; 64]) {
    let mut rows = [[0i32; 8]; 8];
    for (u, row) in rows.iter_mut().enumerate() {
        let coeffs = &block[u * 8..u * 8 + 8];
        for (x, out) in row.iter_mut().enumerate() {
            let mut sum = 0i32;
            for (v, &c) in coeffs.iter().enumerate() {
                sum = sum.wrapping_add(IDCT_BASIS[v][x].wrapping_mul(c as i32));
            }
            *out = sum.wrapping_add(1 << (ROW_SHIFT - 1)) >> ROW_SHIFT;
        }
    }
    for y in 0..8 {
        for x in 0..8 {
            let mut sum = 0i32;
            for (u, row) in rows.iter().enumerate() {
                sum = sum.wrapping_add(IDCT_BASIS[u][y].wrapping_mul(row[x]));
            }
            block[y * 8 + x] = (sum.wrapping_add(1 << (COL_SHIFT - 1)) >> COL_SHIFT) as i16;
        }
    }
}

/// Inverse DCT, then store clamped.
pub fn idct_int_put(dest: &mut [u8], stride: usize, block: &mut [i16; 64]) {
    idct_int(block);
    put_pixels_clamped(block, dest, stride);
}

/// Inverse DCT, then add to the destination clamped.
pub fn idct_int_add(dest: &mut [u8], stride: usize, block: &mut [i16; 64]) {
    idct_int(block);
    add_pixels_clamped(block, dest, stride);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portable::fdct::fdct_islow;

    #[test]
    fn test_dc_only() {
        let mut block = [0i16; 64];
        block[0] = 80;
        idct_int(&mut block);
        assert!(block.iter().all(|&s| s == 10));
    }

    #[test]
    fn test_inverts_forward_transform() {
        let mut seed = 7u32;
        let mut samples = [0i16; 64];
        for s in samples.iter_mut() {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            *s = ((seed >> 16) & 0xff) as i16 - 128;
        }
        let mut block = samples;
        fdct_islow(&mut block);
        // Undo the islow factor of 8
        for c in block.iter_mut() {
            *c = ((*c as i32 + 4) >> 3) as i16;
        }
        idct_int(&mut block);
        for (got, want) in block.iter().zip(samples.iter()) {
            assert!((got - want).abs() <= 2, "{got} vs {want}");
        }
    }

    #[test]
    fn test_put_and_add() {
        let mut block = [0i16; 64];
        block[0] = 8 * 300;
        let mut dest = [0u8; 64];
        idct_int_put(&mut dest, 8, &mut block);
        assert!(dest.iter().all(|&p| p == 255));

        let mut block = [0i16; 64];
        block[0] = -8 * 20;
        let mut dest = [100u8; 64];
        idct_int_add(&mut dest, 8, &mut block);
        assert!(dest.iter().all(|&p| p == 80));
    }
}
