//! Line kernels behind the plane operations.

use crate::cpu::{Backend, DispatchTable, DspConfig};
use crate::portable::deinterlace;
use crate::simd256;

/// Copying deinterlace line: `(dst, [r-2, r-1, r, r+1, r+2], size)`.
pub type DeinterlaceLineFn = fn(&mut [u8], [&[u8]; 5], usize);
/// In-place deinterlace line: `(saved, above, cur, below, size)`.
pub type DeinterlaceLineInPlaceFn = fn(&mut [u8], &[u8], &mut [u8], Option<[&[u8]; 2]>, usize);

/// Plane operation kernels.
#[derive(Clone, Copy)]
pub struct PlaneDsp {
    /// Filters one line into a separate destination.
    pub deinterlace_line: DeinterlaceLineFn,
    /// Filters one line in place using a saved-row scratch buffer.
    pub deinterlace_line_inplace: DeinterlaceLineInPlaceFn,
}

impl PlaneDsp {
    /// Builds the table for `config`.
    pub fn new(config: &DspConfig) -> Self {
        Self::build(config)
    }
}

impl Default for PlaneDsp {
    fn default() -> Self {
        Self::portable(&DspConfig::default())
    }
}

impl DispatchTable for PlaneDsp {
    const NAME: &'static str = "planedsp";

    fn portable(_config: &DspConfig) -> Self {
        Self {
            deinterlace_line: deinterlace::deinterlace_line,
            deinterlace_line_inplace: deinterlace::deinterlace_line_inplace,
        }
    }

    fn apply_backend(&mut self, backend: Backend, config: &DspConfig) {
        if backend == Backend::Simd256 && !config.high_bit_depth {
            self.deinterlace_line = simd256::deinterlace_line;
            self.deinterlace_line_inplace = simd256::deinterlace_line_inplace;
        }
    }
}

impl std::fmt::Debug for PlaneDsp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaneDsp").finish_non_exhaustive()
    }
}
