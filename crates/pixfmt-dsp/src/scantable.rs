//! Coefficient scan orders and IDCT input permutations.
//!
//! An inverse transform may want its coefficients in a layout other than
//! natural row-major order. [`idct_permutation`] gives the placement for each
//! [`PermutationType`]; [`ScanTable`] composes a scan order with it so an
//! entropy decoder can write coefficient `n` of the scan straight to
//! `block[permutated[n]]`.
//!
//! ```rust
//! use pixfmt_dsp::{idct_permutation, PermutationType, ScanTable, ZIGZAG_DIRECT};
//!
//! let perm = idct_permutation(PermutationType::Transpose);
//! let scan = ScanTable::new(&perm, &ZIGZAG_DIRECT);
//! // Second zigzag coefficient is natural index 1, which transposes to 8
//! assert_eq!(scan.permutated[1], 8);
//! assert_eq!(scan.raster_end[1], 8);
//! ```

use crate::error::{DspError, DspResult};

/// Layout an inverse DCT reads its coefficients in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PermutationType {
    /// Natural row-major order.
    None = 1,
    /// Low three bits rotated within each row.
    Libmpeg2 = 2,
    /// Interleaved order of the classic MMX simple IDCT.
    Simple = 3,
    /// Column-major order.
    Transpose = 4,
    /// Partial transpose of the low two bits of row and column.
    PartTrans = 5,
    /// Even/odd split of each row.
    Sse2 = 6,
}

impl TryFrom<u8> for PermutationType {
    type Error = DspError;

    fn try_from(tag: u8) -> DspResult<Self> {
        Ok(match tag {
            1 => Self::None,
            2 => Self::Libmpeg2,
            3 => Self::Simple,
            4 => Self::Transpose,
            5 => Self::PartTrans,
            6 => Self::Sse2,
            _ => return Err(DspError::UnknownPermutation { tag }),
        })
    }
}

#[rustfmt::skip]
const SIMPLE_PERMUTATION: [u8; 64] = [
    0x00, 0x08, 0x04, 0x09, 0x01, 0x0C, 0x05, 0x0D,
    0x10, 0x18, 0x14, 0x19, 0x11, 0x1C, 0x15, 0x1D,
    0x20, 0x28, 0x24, 0x29, 0x21, 0x2C, 0x25, 0x2D,
    0x12, 0x1A, 0x16, 0x1B, 0x13, 0x1E, 0x17, 0x1F,
    0x02, 0x0A, 0x06, 0x0B, 0x03, 0x0E, 0x07, 0x0F,
    0x30, 0x38, 0x34, 0x39, 0x31, 0x3C, 0x35, 0x3D,
    0x22, 0x2A, 0x26, 0x2B, 0x23, 0x2E, 0x27, 0x2F,
    0x32, 0x3A, 0x36, 0x3B, 0x33, 0x3E, 0x37, 0x3F,
];

const SSE2_ROW: [u8; 8] = [0, 4, 1, 5, 2, 6, 3, 7];

/// Placement table for `kind`: natural index `i` goes to `perm[i]`.
pub fn idct_permutation(kind: PermutationType) -> [u8; 64] {
    std::array::from_fn(|i| {
        let i = i as u8;
        match kind {
            PermutationType::None => i,
            PermutationType::Libmpeg2 => (i & 0x38) | ((i & 6) >> 1) | ((i & 1) << 2),
            PermutationType::Simple => SIMPLE_PERMUTATION[i as usize],
            PermutationType::Transpose => ((i & 7) << 3) | (i >> 3),
            PermutationType::PartTrans => (i & 0x24) | ((i & 3) << 3) | ((i >> 3) & 3),
            PermutationType::Sse2 => (i & 0x38) | SSE2_ROW[(i & 7) as usize],
        }
    })
}

/// A scan order composed with an IDCT permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTable {
    /// Scan order in natural indices.
    pub scantable: [u8; 64],
    /// `permutation[scantable[n]]`.
    pub permutated: [u8; 64],
    /// Highest permuted index among the first `n + 1` scan positions.
    pub raster_end: [u8; 64],
}

impl ScanTable {
    /// Composes `scantable` with `permutation`.
    pub fn new(permutation: &[u8; 64], scantable: &[u8; 64]) -> Self {
        let permutated: [u8; 64] = std::array::from_fn(|n| permutation[scantable[n] as usize]);
        let mut raster_end = [0u8; 64];
        let mut end = 0u8;
        for (r, &p) in raster_end.iter_mut().zip(&permutated) {
            end = end.max(p);
            *r = end;
        }
        Self {
            scantable: *scantable,
            permutated,
            raster_end,
        }
    }
}

/// Classic zigzag scan.
#[rustfmt::skip]
pub const ZIGZAG_DIRECT: [u8; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Alternate scan favouring horizontal frequencies.
#[rustfmt::skip]
pub const ALTERNATE_HORIZONTAL_SCAN: [u8; 64] = [
     0,  1,  2,  3,  8,  9, 16, 17,
    10, 11,  4,  5,  6,  7, 15, 14,
    13, 12, 19, 18, 24, 25, 32, 33,
    26, 27, 20, 21, 22, 23, 28, 29,
    30, 31, 34, 35, 40, 41, 48, 49,
    42, 43, 36, 37, 38, 39, 44, 45,
    46, 47, 50, 51, 56, 57, 58, 59,
    52, 53, 54, 55, 60, 61, 62, 63,
];

/// Alternate scan favouring vertical frequencies (interlaced content).
#[rustfmt::skip]
pub const ALTERNATE_VERTICAL_SCAN: [u8; 64] = [
     0,  8, 16, 24,  1,  9,  2, 10,
    17, 25, 32, 40, 48, 56, 57, 49,
    41, 33, 26, 18,  3, 11,  4, 12,
    19, 27, 34, 42, 50, 58, 35, 43,
    51, 59, 20, 28,  5, 13,  6, 14,
    21, 29, 36, 44, 52, 60, 37, 45,
    53, 61, 22, 30,  7, 15, 23, 31,
    38, 46, 54, 62, 39, 47, 55, 63,
];
