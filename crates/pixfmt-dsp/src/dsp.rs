//! General block DSP table used by encoders and motion search.

use crate::cpu::{Backend, DispatchTable, DspConfig};
use crate::portable::{edges, fdct, motion, pixels};
use crate::{simd128, simd256};

/// Loads an 8x8 block: `(block, pixels, stride)`.
pub type GetPixelsFn = fn(&mut [i16; 64], &[u8], usize);
/// Block difference: `(block, s1, s2, stride)`.
pub type DiffPixelsFn = fn(&mut [i16; 64], &[u8], &[u8], usize);
/// Coefficient magnitude sum.
pub type SumAbsFn = fn(&[i16; 64]) -> i32;
/// Block comparison: `(a, b, stride, h)`.
pub type CompareFn = fn(&[u8], &[u8], usize, usize) -> i32;
/// In-place 8x8 transform.
pub type TransformFn = fn(&mut [i16; 64]);
/// Edge extension: `(buf, origin, stride, width, height, w, h, sides)`.
pub type DrawEdgesFn = fn(&mut [u8], usize, usize, usize, usize, usize, usize, u32);

/// Block DSP kernels.
#[derive(Clone, Copy)]
pub struct DspContext {
    /// 8x8 sample load (8 or 16 bit per [`DspConfig::high_bit_depth`]).
    pub get_pixels: GetPixelsFn,
    /// 8x8 residual.
    pub diff_pixels: DiffPixelsFn,
    /// Sum of absolute coefficients.
    pub sum_abs_dctelem: SumAbsFn,
    /// SAD, `[16 wide, 8 wide]`.
    pub sad: [CompareFn; 2],
    /// SSE, `[16 wide, 8 wide]`.
    pub sse: [CompareFn; 2],
    /// Forward DCT.
    pub fdct: TransformFn,
    /// Border extension.
    pub draw_edges: DrawEdgesFn,
}

impl DspContext {
    /// Builds the table for `config`.
    pub fn new(config: &DspConfig) -> Self {
        Self::build(config)
    }
}

impl DispatchTable for DspContext {
    const NAME: &'static str = "dsp";

    fn portable(config: &DspConfig) -> Self {
        Self {
            get_pixels: if config.high_bit_depth {
                pixels::get_pixels_16
            } else {
                pixels::get_pixels_8
            },
            diff_pixels: pixels::diff_pixels,
            sum_abs_dctelem: pixels::sum_abs_dctelem,
            sad: [motion::sad16, motion::sad8],
            sse: [motion::sse16, motion::sse8],
            fdct: fdct::fdct_islow,
            draw_edges: edges::draw_edges_8,
        }
    }

    fn apply_backend(&mut self, backend: Backend, config: &DspConfig) {
        match backend {
            Backend::Simd128 => {
                self.sum_abs_dctelem = simd128::sum_abs_dctelem;
                if !config.high_bit_depth {
                    self.sad = [simd128::sad16, simd128::sad8];
                    self.sse = [simd128::sse16, simd128::sse8];
                    self.diff_pixels = simd128::diff_pixels;
                }
            }
            Backend::Simd256 => {
                self.sum_abs_dctelem = simd256::sum_abs_dctelem;
            }
        }
    }
}

impl std::fmt::Debug for DspContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DspContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CpuFlags;

    #[test]
    fn test_portable_slots() {
        let ctx = DspContext::new(&DspConfig::default());
        assert!(std::ptr::fn_addr_eq(ctx.sad[0], motion::sad16 as CompareFn));
        assert!(std::ptr::fn_addr_eq(ctx.get_pixels, pixels::get_pixels_8 as GetPixelsFn));
    }

    #[test]
    fn test_high_bit_depth_keeps_portable_8bit_kernels() {
        let config = DspConfig::new(CpuFlags::all()).with_high_bit_depth(true);
        let ctx = DspContext::new(&config);
        assert!(std::ptr::fn_addr_eq(ctx.sad[0], motion::sad16 as CompareFn));
        assert!(std::ptr::fn_addr_eq(ctx.get_pixels, pixels::get_pixels_16 as GetPixelsFn));
        assert!(std::ptr::fn_addr_eq(ctx.sum_abs_dctelem, simd256::sum_abs_dctelem as SumAbsFn));
    }

    #[test]
    fn test_most_capable_backend_wins() {
        let ctx = DspContext::new(&DspConfig::new(CpuFlags::all()));
        assert!(std::ptr::fn_addr_eq(ctx.sum_abs_dctelem, simd256::sum_abs_dctelem as SumAbsFn));
        assert!(std::ptr::fn_addr_eq(ctx.sad[1], simd128::sad8 as CompareFn));

        let ctx = DspContext::new(&DspConfig::new(CpuFlags::SIMD128));
        assert!(std::ptr::fn_addr_eq(ctx.sum_abs_dctelem, simd128::sum_abs_dctelem as SumAbsFn));
    }
}
