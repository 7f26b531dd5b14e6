//! # pixfmt-dsp
//!
//! Kernel tables with setup-time dispatch to vector backends.
//!
//! Each table is a plain struct of `fn` pointers. Building one fills every
//! slot with a portable kernel, then lets each backend enabled by the
//! caller's [`CpuFlags`] replace the slots it accelerates:
//!
//! - [`DspContext`] - pixel load/diff, SAD/SSE, forward DCT, edge extension
//! - [`IdctDspContext`] - inverse DCT plus its coefficient permutation
//! - [`PlaneDsp`] - line kernels for the plane operations
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_dsp::{CpuFlags, DspConfig, IdctDspContext, PermutationType};
//!
//! let config = DspConfig::new(CpuFlags::SIMD128 | CpuFlags::SIMD256);
//! let idct = IdctDspContext::new(&config);
//! assert_eq!(idct.perm_type, PermutationType::Transpose);
//!
//! let mut block = [0i16; 64];
//! block[idct.idct_permutation[0] as usize] = 8 * 50;
//! let mut out = [0u8; 64];
//! (idct.idct_put)(&mut out, 8, &mut block);
//! assert!(out.iter().all(|&p| p == 50));
//! ```
//!
//! Tables are `Copy` and hold no state, so one build can be shared across
//! threads for the life of a pipeline.
//!
//! # Dependencies
//!
//! - [`wide`] - Portable SIMD lanes for the vector backends
//! - [`tracing`] - Debug events when backends are applied

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cpu;
pub mod dsp;
pub mod error;
pub mod idctdsp;
pub mod planedsp;
pub mod portable;
pub mod scantable;
pub mod simd128;
pub mod simd256;

pub use cpu::{Backend, CpuFlags, DispatchTable, DspConfig};
pub use dsp::DspContext;
pub use error::{DspError, DspResult};
pub use idctdsp::IdctDspContext;
pub use planedsp::PlaneDsp;
pub use portable::edges::{EDGE_BOTTOM, EDGE_TOP};
pub use scantable::{
    idct_permutation, PermutationType, ScanTable, ALTERNATE_HORIZONTAL_SCAN,
    ALTERNATE_VERTICAL_SCAN, ZIGZAG_DIRECT,
};
