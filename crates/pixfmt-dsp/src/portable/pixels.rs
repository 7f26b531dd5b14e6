//! 8x8 block transfer between pixels and coefficients.

use super::clip_u8;

/// Loads an 8x8 block of 8-bit samples.
pub fn get_pixels_8(block: &mut [i16; 64], pixels: &[u8], stride: usize) {
    for (y, out) in block.chunks_exact_mut(8).enumerate() {
        let row = &pixels[y * stride..y * stride + 8];
        for (o, &p) in out.iter_mut().zip(row) {
            *o = p as i16;
        }
    }
}

/// Loads an 8x8 block of native-endian 16-bit samples.
///
/// `stride` is in bytes.
pub fn get_pixels_16(block: &mut [i16; 64], pixels: &[u8], stride: usize) {
    for (y, out) in block.chunks_exact_mut(8).enumerate() {
        let row = &pixels[y * stride..y * stride + 16];
        for (o, pair) in out.iter_mut().zip(row.chunks_exact(2)) {
            *o = u16::from_ne_bytes([pair[0], pair[1]]) as i16;
        }
    }
}

/// `block = s1 - s2` over an 8x8 area.
pub fn diff_pixels(block: &mut [i16; 64], s1: &[u8], s2: &[u8], stride: usize) {
    for (y, out) in block.chunks_exact_mut(8).enumerate() {
        let a = &s1[y * stride..y * stride + 8];
        let b = &s2[y * stride..y * stride + 8];
        for ((o, &x), &z) in out.iter_mut().zip(a).zip(b) {
            *o = x as i16 - z as i16;
        }
    }
}

/// Sum of absolute coefficient values.
pub fn sum_abs_dctelem(block: &[i16; 64]) -> i32 {
    block.iter().map(|&c| (c as i32).abs()).sum()
}

/// Stores `block` clamped to `0..=255`.
pub fn put_pixels_clamped(block: &[i16; 64], pixels: &mut [u8], stride: usize) {
    for (y, row) in block.chunks_exact(8).enumerate() {
        let out = &mut pixels[y * stride..y * stride + 8];
        for (o, &c) in out.iter_mut().zip(row) {
            *o = clip_u8(c as i32);
        }
    }
}

/// Stores `block + 128` clamped to `0..=255`.
pub fn put_signed_pixels_clamped(block: &[i16; 64], pixels: &mut [u8], stride: usize) {
    for (y, row) in block.chunks_exact(8).enumerate() {
        let out = &mut pixels[y * stride..y * stride + 8];
        for (o, &c) in out.iter_mut().zip(row) {
            *o = clip_u8(c as i32 + 128);
        }
    }
}

/// Adds `block` to the pixels, clamping to `0..=255`.
pub fn add_pixels_clamped(block: &[i16; 64], pixels: &mut [u8], stride: usize) {
    for (y, row) in block.chunks_exact(8).enumerate() {
        let out = &mut pixels[y * stride..y * stride + 8];
        for (o, &c) in out.iter_mut().zip(row) {
            *o = clip_u8(*o as i32 + c as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixels_strided() {
        let src: Vec<u8> = (0..160).map(|v| v as u8).collect();
        let mut block = [0i16; 64];
        get_pixels_8(&mut block, &src, 20);
        assert_eq!(block[0], 0);
        assert_eq!(block[9], 21);
        assert_eq!(block[63], 7 * 20 + 7);
    }

    #[test]
    fn test_get_pixels_16() {
        let mut src = vec![0u8; 16 * 8];
        src[2..4].copy_from_slice(&1000u16.to_ne_bytes());
        let mut block = [0i16; 64];
        get_pixels_16(&mut block, &src, 16);
        assert_eq!(block[1], 1000);
    }

    #[test]
    fn test_signed_put_saturates() {
        let mut block = [0i16; 64];
        block[0] = -200;
        block[1] = 127;
        block[2] = 300;
        let mut out = [0u8; 64];
        put_signed_pixels_clamped(&block, &mut out, 8);
        assert_eq!(&out[..4], &[0, 255, 255, 128]);
    }

    #[test]
    fn test_add_clamps() {
        let mut block = [10i16; 64];
        block[1] = -300;
        let mut out = [250u8; 64];
        add_pixels_clamped(&block, &mut out, 8);
        assert_eq!(out[0], 255);
        assert_eq!(out[1], 0);
    }
}
