//! Vertical 5-tap line filter that rebuilds one field from the other.
//!
//! The filtered line is
//! `clip((-r[-2] + 4 r[-1] + 2 r[0] + 4 r[1] - r[2] + 4) >> 3)`.

use super::clip_u8;

#[inline(always)]
pub(crate) fn tap(m4: u8, m3: u8, m2: u8, m1: u8, m0: u8) -> u8 {
    let sum = -(m4 as i32) + 4 * m3 as i32 + 2 * m2 as i32 + 4 * m1 as i32 - m0 as i32;
    clip_u8((sum + 4) >> 3)
}

/// Filters `size` pixels of the rows `[r-2, r-1, r, r+1, r+2]` into `dst`.
pub fn deinterlace_line(dst: &mut [u8], rows: [&[u8]; 5], size: usize) {
    let [m4, m3, m2, m1, m0] = rows;
    for i in 0..size {
        dst[i] = tap(m4[i], m3[i], m2[i], m1[i], m0[i]);
    }
}

/// Filters row `cur` in place.
///
/// `saved` holds row `r-2` on entry and receives the original `cur` on
/// return, ready to be row `r-2` of the next call. `below` holds rows `r+1`
/// and `r+2`; `None` repeats `cur` for both, as on the last line.
pub fn deinterlace_line_inplace(
    saved: &mut [u8],
    above: &[u8],
    cur: &mut [u8],
    below: Option<[&[u8]; 2]>,
    size: usize,
) {
    for i in 0..size {
        let m2 = cur[i];
        let (m1, m0) = match below {
            Some([m1, m0]) => (m1[i], m0[i]),
            None => (m2, m2),
        };
        cur[i] = tap(saved[i], above[i], m2, m1, m0);
        saved[i] = m2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_is_identity() {
        let row: &[u8] = &[77u8; 8];
        let mut out = [0u8; 8];
        deinterlace_line(&mut out, [row; 5], 8);
        assert_eq!(out, [77u8; 8]);
    }

    #[test]
    fn test_clips() {
        let zero: &[u8] = &[0u8; 4];
        let full: &[u8] = &[255u8; 4];
        let mut out = [1u8; 4];
        // -255 + 0 + 0 + 0 - 255 < 0
        deinterlace_line(&mut out, [full, zero, zero, zero, full], 4);
        assert_eq!(out, [0; 4]);
        // 4*255 + 2*255 + 4*255 > 255 * 8
        deinterlace_line(&mut out, [zero, full, full, full, zero], 4);
        assert_eq!(out, [255; 4]);
    }

    #[test]
    fn test_inplace_matches_copy() {
        let rows: [&[u8]; 5] = [
            &[10, 20, 30, 40],
            &[50, 60, 70, 80],
            &[5, 200, 7, 9],
            &[1, 2, 3, 4],
            &[90, 0, 90, 0],
        ];
        let mut expected = [0u8; 4];
        deinterlace_line(&mut expected, rows, 4);

        let mut saved = rows[0].to_vec();
        let mut cur = rows[2].to_vec();
        deinterlace_line_inplace(&mut saved, rows[1], &mut cur, Some([rows[3], rows[4]]), 4);
        assert_eq!(cur, expected);
        assert_eq!(saved, rows[2]);

        let mut last = [0u8; 4];
        deinterlace_line(&mut last, [rows[0], rows[1], rows[2], rows[2], rows[2]], 4);
        let mut saved = rows[0].to_vec();
        let mut cur = rows[2].to_vec();
        deinterlace_line_inplace(&mut saved, rows[1], &mut cur, None, 4);
        assert_eq!(cur, last);
    }
}
