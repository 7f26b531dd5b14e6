//! Block comparison metrics used by motion search.
//!
//! Slot 0 compares 16 pixels wide, slot 1 compares 8; `h` is the row count.

fn sad_wide<const W: usize>(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    let mut sum = 0;
    for y in 0..h {
        let ra = &a[y * stride..y * stride + W];
        let rb = &b[y * stride..y * stride + W];
        sum += ra.iter().zip(rb).map(|(&x, &z)| (x as i32 - z as i32).abs()).sum::<i32>();
    }
    sum
}

fn sse_wide<const W: usize>(a: &[u8], b: &[u8], stride: usize, h: usize) -> i32 {
    let mut sum = 0;
    for y in 0..h {
        let ra = &a[y * stride..y * stride + W];
        let rb = &b[y * stride..y * stride + W];
        sum += ra
            .iter()
            .zip(rb)
            .map(|(&x, &z)| {
                let d = x as i32 - z as i32;
                d * d
            })
            .sum::<i32>();
    }
    sum
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
