//! 128-bit vector kernels.
//!
//! Built on the `wide` crate so they compile to native vector code on any
//! target with 128-bit lanes and fall back to scalar elsewhere. Every kernel
//! returns exactly what its portable counterpart returns.

use wide::{i16x8, i32x4};

#[inline(always)]
fn widen8(s: &[u8]) -> i16x8 {
    i16x8::from([
        s[0] as i16, s[1] as i16, s[2] as i16, s[3] as i16,
        s[4] as i16, s[5] as i16, s[6] as i16, s[7] as i16,
    ])
}

#[inline(always)]
fn widen4(s: &[u8]) -> i32x4 {
    i32x4::from([s[0] as i32, s[1] as i32, s[2] as i32, s[3] as i32])
}

#[inline(always)]
fn hsum16(v: i16x8) -> i32 {
    v.to_array().iter().map(|&x| x as i32).sum()
}

#[inline(always)]
fn hsum32(v: i32x4) -> i32 {
    v.to_array().iter().sum()
}

fn sad_wide<const W: usize>(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    let mut sum = 0;
    for y in 0..h {
        let ra = &a[y * stride..y * stride + W];
        let rb = &b[y * stride..y * stride + W];
        let mut acc = i16x8::splat(0);
        for (ca, cb) in ra.chunks_exact(8).zip(rb.chunks_exact(8)) {
            acc = acc + (widen8(ca) - widen8(cb)).abs();
        }
        sum += hsum16(acc);
    }
    sum
}

fn sse_wide<const W: usize>(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    let mut acc = i32x4::splat(0);
    for y in 0..h {
        let ra = &a[y * stride..y * stride + W];
        let rb = &b[y * stride..y * stride + W];
        for (ca, cb) in ra.chunks_exact(4).zip(rb.chunks_exact(4)) {
            let d = widen4(ca) - widen4(cb);
            acc = acc + d * d;
        }
    }
    hsum32(acc)
}

/// Sum of absolute differences, 16 wide.
pub fn sad16(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    sad_wide::<16>(a, b, stride, h)
}

/// Sum of absolute differences, 8 wide.
pub fn sad8(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    sad_wide::<8>(a, b, stride, h)
}

/// Sum of squared errors, 16 wide.
pub fn sse16(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    sse_wide::<16>(a, b, stride, h)
}

/// Sum of squared errors, 8 wide.
pub fn sse8(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    sse_wide::<8>(a, b, stride, h)
}

/// Sum of absolute coefficient values.
pub fn sum_abs_dctelem(block: &[i16; 64]) -> i32 {
    let mut acc = i32x4::splat(0);
    for c in block.chunks_exact(4) {
        acc = acc + i32x4::from([c[0] as i32, c[1] as i32, c[2] as i32, c[3] as i32]).abs();
    }
    hsum32(acc)
}

/// `block = s1 - s2` over an 8x8 area.
pub fn diff_pixels(block: &mut [i16; 64], s1: &[u8], s2: &[u8], stride: usize) {
    for (y, out) in block.chunks_exact_mut(8).enumerate() {
        let d = widen8(&s1[y * stride..]) - widen8(&s2[y * stride..]);
        out.copy_from_slice(&d.to_array());
    }
}
