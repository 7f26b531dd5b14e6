//! Accurate integer forward DCT (the "islow" factorisation).
//!
//! Output coefficients are scaled up by 8 relative to an orthonormal DCT;
//! quantizer tables absorb the factor.

const CONST_BITS: u32 = 13;
const PASS1_BITS: u32 = 2;

const FIX_0_298631336: i32 = 2446;
const FIX_0_390180644: i32 = 3196;
const FIX_0_541196100: i32 = 4433;
const FIX_0_765366865: i32 = 6270;
const FIX_0_899976223: i32 = 7373;
const FIX_1_175875602: i32 = 9633;
const FIX_1_501321110: i32 = 12299;
const FIX_1_847759065: i32 = 15137;
const FIX_1_961570560: i32 = 16069;
const FIX_2_053119869: i32 = 16819;
const FIX_2_562915447: i32 = 20995;
const FIX_3_072711026: i32 = 25172;

#[inline(always)]
fn descale(x: i32, n: u32) -> i32 {
    (x + (1 << (n - 1))) >> n
}

/// One 8-point transform over `data[start + k * step]`.
///
/// The row pass keeps `PASS1_BITS` of extra precision; the column pass
/// removes it.
#[inline(always)]
fn pass(data: &mut [i32; 64], start: usize, step: usize, rows: bool) {
    let at = |k: usize| start + k * step;
    let d = |k: usize| data[at(k)];

    let tmp0 = d(0) + d(7);
    let tmp7 = d(0) - d(7);
    let tmp1 = d(1) + d(6);
    let tmp6 = d(1) - d(6);
    let tmp2 = d(2) + d(5);
    let tmp5 = d(2) - d(5);
    let tmp3 = d(3) + d(4);
    let tmp4 = d(3) - d(4);

    let (even_shift, odd_shift) = if rows {
        (0, CONST_BITS - PASS1_BITS)
    } else {
        (PASS1_BITS, CONST_BITS + PASS1_BITS)
    };
    let even = |v: i32| {
        if rows {
            v << PASS1_BITS
        } else {
            descale(v, even_shift)
        }
    };

    // Even part
    let tmp10 = tmp0 + tmp3;
    let tmp13 = tmp0 - tmp3;
    let tmp11 = tmp1 + tmp2;
    let tmp12 = tmp1 - tmp2;

    data[at(0)] = even(tmp10 + tmp11);
    data[at(4)] = even(tmp10 - tmp11);

    let z1 = (tmp12 + tmp13) * FIX_0_541196100;
    data[at(2)] = descale(z1 + tmp13 * FIX_0_765366865, odd_shift);
    data[at(6)] = descale(z1 - tmp12 * FIX_1_847759065, odd_shift);

    // Odd part
    let z1 = tmp4 + tmp7;
    let z2 = tmp5 + tmp6;
    let z3 = tmp4 + tmp6;
    let z4 = tmp5 + tmp7;
    let z5 = (z3 + z4) * FIX_1_175875602;

    let tmp4 = tmp4 * FIX_0_298631336;
    let tmp5 = tmp5 * FIX_2_053119869;
    let tmp6 = tmp6 * FIX_3_072711026;
    let tmp7 = tmp7 * FIX_1_501321110;
    let z1 = -z1 * FIX_0_899976223;
    let z2 = -z2 * FIX_2_562915447;
    let z3 = z5 - z3 * FIX_1_961570560;
    let z4 = z5 - z4 * FIX_0_390180644;

    data[at(7)] = descale(tmp4 + z1 + z3, odd_shift);
    data[at(5)] = descale(tmp5 + z2 + z4, odd_shift);
    data[at(3)] = descale(tmp6 + z2 + z3, odd_shift);
    data[at(1)] = descale(tmp7 + z1 + z4, odd_shift);
}

/// Forward DCT of an 8x8 block in place.
///
/// Input samples are expected in `-256..=255` (level-shifted pixels or
/// residuals).
pub fn fdct_islow(block: &mut [i16; 64]) {
    let mut data = [0i32; 64];
    for (d, &s) in data.iter_mut().zip(block.iter()) {
        *d = s as i32;
    }
    for row in 0..8 {
        pass(&mut data, row * 8, 1, true);
    }
    for col in 0..8 {
        pass(&mut data, col, 8, false);
    }
    for (s, &d) in block.iter_mut().zip(data.iter()) {
        *s = d as i16;
    }
}
