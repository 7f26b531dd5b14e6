//! Inverse transform table and its coefficient permutation.

use crate::cpu::{Backend, DispatchTable, DspConfig};
use crate::portable::{idct, pixels};
use crate::scantable::{idct_permutation, PermutationType};
use crate::simd256;

/// Block store: `(block, pixels, stride)`.
pub type PutPixelsFn = fn(&[i16; 64], &mut [u8], usize);
/// In-place inverse transform.
pub type IdctFn = fn(&mut [i16; 64]);
/// Inverse transform into pixels: `(dest, stride, block)`.
pub type IdctPutFn = fn(&mut [u8], usize, &mut [i16; 64]);

/// Inverse DCT kernels.
///
/// `idct`, `idct_put` and `idct_add` expect coefficients placed through
/// [`idct_permutation`](Self::idct_permutation): coefficient `i` in natural
/// order goes to `block[idct_permutation[i]]`.
#[derive(Clone, Copy)]
pub struct IdctDspContext {
    /// Clamped store.
    pub put_pixels_clamped: PutPixelsFn,
    /// Clamped store of signed samples biased by 128.
    pub put_signed_pixels_clamped: PutPixelsFn,
    /// Clamped accumulate.
    pub add_pixels_clamped: PutPixelsFn,
    /// Inverse DCT in place.
    pub idct: IdctFn,
    /// Inverse DCT then clamped store.
    pub idct_put: IdctPutFn,
    /// Inverse DCT then clamped accumulate.
    pub idct_add: IdctPutFn,
    /// Coefficient placement the installed `idct` reads.
    pub idct_permutation: [u8; 64],
    /// Tag of `idct_permutation`.
    pub perm_type: PermutationType,
}

impl IdctDspContext {
    /// Builds the table for `config`.
    pub fn new(config: &DspConfig) -> Self {
        Self::build(config)
    }

    fn set_permutation(&mut self, kind: PermutationType) {
        self.perm_type = kind;
        self.idct_permutation = idct_permutation(kind);
    }
}

impl DispatchTable for IdctDspContext {
    const NAME: &'static str = "idctdsp";

    fn portable(_config: &DspConfig) -> Self {
        Self {
            put_pixels_clamped: pixels::put_pixels_clamped,
            put_signed_pixels_clamped: pixels::put_signed_pixels_clamped,
            add_pixels_clamped: pixels::add_pixels_clamped,
            idct: idct::idct_int,
            idct_put: idct::idct_int_put,
            idct_add: idct::idct_int_add,
            idct_permutation: idct_permutation(PermutationType::None),
            perm_type: PermutationType::None,
        }
    }

    fn apply_backend(&mut self, backend: Backend, config: &DspConfig) {
        match backend {
            Backend::Simd128 => {}
            Backend::Simd256 => {
                if !config.high_bit_depth {
                    self.idct = simd256::idct_transposed;
                    self.idct_put = simd256::idct_put;
                    self.idct_add = simd256::idct_add;
                    self.set_permutation(PermutationType::Transpose);
                }
            }
        }
    }
}

impl std::fmt::Debug for IdctDspContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdctDspContext")
            .field("perm_type", &self.perm_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuFlags;

    #[test]
    fn test_permutation_follows_idct() {
        let ctx = IdctDspContext::new(&DspConfig::default());
        assert_eq!(ctx.perm_type, PermutationType::None);

        let ctx = IdctDspContext::new(&DspConfig::new(CpuFlags::SIMD256));
        assert_eq!(ctx.perm_type, PermutationType::Transpose);
        assert_eq!(ctx.idct_permutation[1], 8);
        assert!(std::ptr::fn_addr_eq(ctx.idct, simd256::idct_transposed as IdctFn));

        let hbd = DspConfig::new(CpuFlags::SIMD256).with_high_bit_depth(true);
        assert_eq!(IdctDspContext::new(&hbd).perm_type, PermutationType::None);
    }
}
