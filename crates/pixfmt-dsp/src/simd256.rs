//! 256-bit vector kernels.
//!
//! The inverse DCT here reads its coefficients transposed (column-major),
//! so a table using it must report [`PermutationType::Transpose`] and
//! callers must place coefficients through its permutation.
//!
//! [`PermutationType::Transpose`]: crate::PermutationType::Transpose

use wide::i32x8;

use crate::portable::deinterlace::tap;
use crate::portable::idct::{COL_SHIFT, IDCT_BASIS, ROW_SHIFT};
use crate::portable::pixels::{add_pixels_clamped, put_pixels_clamped};

#[inline(always)]
fn widen(s: &[u8]) -> i32x8 {
    i32x8::from([
        s[0] as i32, s[1] as i32, s[2] as i32, s[3] as i32,
        s[4] as i32, s[5] as i32, s[6] as i32, s[7] as i32,
    ])
}

#[inline(always)]
fn narrow(v: i32x8, out: &mut [u8]) {
    for (o, x) in out.iter_mut().zip(v.to_array()) {
        *o = x as u8;
    }
}

/// Sum of absolute coefficient values.
pub fn sum_abs_dctelem(block: &[i16; 64]) -> i32 {
    let mut acc = i32x8::splat(0);
    for c in block.chunks_exact(8) {
        let lanes: [i32; 8] = std::array::from_fn(|i| c[i] as i32);
        acc = acc + i32x8::from(lanes).abs();
    }
    acc.to_array().iter().sum()
}

/// Inverse DCT of a transposed block in place; the output is row-major.
///
/// Row `v` of the input holds horizontal frequency `v` for every vertical
/// frequency, so the row pass runs over contiguous loads.
pub fn idct_transposed(block: &mut [i16; 64]) {
    // tmp[x] lane u = row pass output for vertical frequency u, column x
    let row_round = i32x8::splat(1 << (ROW_SHIFT - 1));
    let mut tmp = [i32x8::splat(0); 8];
    for (x, t) in tmp.iter_mut().enumerate() {
        let mut sum = i32x8::splat(0);
        for v in 0..8 {
            let lanes: [i32; 8] = std::array::from_fn(|u| block[v * 8 + u] as i32);
            sum = sum + i32x8::from(lanes) * i32x8::splat(IDCT_BASIS[v][x]);
        }
        *t = (sum + row_round) >> ROW_SHIFT;
    }

    let cols = tmp.map(|t| t.to_array());
    let col_round = i32x8::splat(1 << (COL_SHIFT - 1));
    let mut out = [i32x8::splat(0); 8];
    for (u, basis) in IDCT_BASIS.iter().enumerate() {
        let row = i32x8::from(std::array::from_fn::<i32, 8, _>(|x| cols[x][u]));
        for (o, &b) in out.iter_mut().zip(basis) {
            *o = *o + row * i32x8::splat(b);
        }
    }
    for (y, o) in out.iter().enumerate() {
        let samples = ((*o + col_round) >> COL_SHIFT).to_array();
        for (dst, s) in block[y * 8..y * 8 + 8].iter_mut().zip(samples) {
            *dst = s as i16;
        }
    }
}

/// Transposed inverse DCT, then store clamped.
pub fn idct_put(dest: &mut [u8], stride: usize, block: &mut [i16; 64]) {
    idct_transposed(block);
    put_pixels_clamped(block, dest, stride);
}

/// Transposed inverse DCT, then add to the destination clamped.
pub fn idct_add(dest: &mut [u8], stride: usize, block: &mut [i16; 64]) {
    idct_transposed(block);
    add_pixels_clamped(block, dest, stride);
}

#[inline(always)]
fn tap8(m4: i32x8, m3: i32x8, m2: i32x8, m1: i32x8, m0: i32x8) -> i32x8 {
    let four = i32x8::splat(4);
    let sum = four * (m3 + m1) + m2 + m2 - m4 - m0;
    ((sum + four) >> 3_i32).max(i32x8::splat(0)).min(i32x8::splat(255))
}

/// Filters `size` pixels of the rows `[r-2, r-1, r, r+1, r+2]` into `dst`.
pub fn deinterlace_line(dst: &mut [u8], rows: [&[u8]; 5], size: usize) {
    let [m4, m3, m2, m1, m0] = rows;
    let body = size - size % 8;
    for i in (0..body).step_by(8) {
        let v = tap8(
            widen(&m4[i..]),
            widen(&m3[i..]),
            widen(&m2[i..]),
            widen(&m1[i..]),
            widen(&m0[i..]),
        );
        narrow(v, &mut dst[i..i + 8]);
    }
    for i in body..size {
        dst[i] = tap(m4[i], m3[i], m2[i], m1[i], m0[i]);
    }
}

/// Filters row `cur` in place; see the portable kernel for the contract.
pub fn deinterlace_line_inplace(
    saved: &mut [u8],
    above: &[u8],
    cur: &mut [u8],
    below: Option<[&[u8]; 2]>,
    size: usize,
) {
    let body = size - size % 8;
    for i in (0..body).step_by(8) {
        let m2 = widen(&cur[i..]);
        let (m1, m0) = match below {
            Some([m1, m0]) => (widen(&m1[i..]), widen(&m0[i..])),
            None => (m2, m2),
        };
        let v = tap8(widen(&saved[i..]), widen(&above[i..]), m2, m1, m0);
        saved[i..i + 8].copy_from_slice(&cur[i..i + 8]);
        narrow(v, &mut cur[i..i + 8]);
    }
    for i in body..size {
        let m2 = cur[i];
        let (m1, m0) = match below {
            Some([m1, m0]) => (m1[i], m0[i]),
            None => (m2, m2),
        };
        cur[i] = tap(saved[i], above[i], m2, m1, m0);
        saved[i] = m2;
    }
}
