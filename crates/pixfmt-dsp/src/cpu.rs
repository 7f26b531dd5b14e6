//! Capability flags, backend ordering and the dispatch table contract.
//!
//! Tables of kernels are built in two steps: a portable table is filled
//! first, then each backend enabled by the caller's [`CpuFlags`] overwrites
//! the slots it accelerates. Backends run in [`Backend::ALL`] order, least
//! capable first, so when two backends provide the same slot the more
//! capable one wins.
//!
//! ```rust
//! use pixfmt_dsp::{Backend, CpuFlags};
//!
//! let flags = CpuFlags::SIMD256 | CpuFlags::SIMD128;
//! let order: Vec<_> = Backend::enabled(flags).collect();
//! assert_eq!(order, [Backend::Simd128, Backend::Simd256]);
//! ```
//!
//! CPU probing is left to the caller; nothing here inspects the host.

use std::fmt;
use std::ops::BitOr;

use tracing::debug;

/// Capability bits supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CpuFlags(u32);

impl CpuFlags {
    /// 128-bit vector instructions.
    pub const SIMD128: Self = Self(1 << 0);
    /// 256-bit vector instructions.
    pub const SIMD256: Self = Self(1 << 1);

    /// No capability; only portable kernels are used.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every known capability.
    #[inline]
    pub const fn all() -> Self {
        Self(Self::SIMD128.0 | Self::SIMD256.0)
    }

    /// Builds flags from raw bits, ignoring unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::all().0)
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// All bits of `other` are set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CpuFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Accelerated kernel families, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 128-bit vector kernels.
    Simd128,
    /// 256-bit vector kernels.
    Simd256,
}

impl Backend {
    /// Every backend, least capable first.
    pub const ALL: [Backend; 2] = [Backend::Simd128, Backend::Simd256];

    /// Flag that enables this backend.
    #[inline]
    pub const fn flag(self) -> CpuFlags {
        match self {
            Backend::Simd128 => CpuFlags::SIMD128,
            Backend::Simd256 => CpuFlags::SIMD256,
        }
    }

    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Simd128 => "simd128",
            Backend::Simd256 => "simd256",
        }
    }

    /// Backends enabled by `flags`, in application order.
    pub fn enabled(flags: CpuFlags) -> impl Iterator<Item = Backend> {
        Self::ALL.into_iter().filter(move |b| flags.contains(b.flag()))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime configuration of a table build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DspConfig {
    /// Enabled backends.
    pub cpu: CpuFlags,
    /// Samples wider than 8 bits; 8-bit-only vector kernels are skipped.
    pub high_bit_depth: bool,
}

impl DspConfig {
    /// 8-bit configuration with the given flags.
    pub const fn new(cpu: CpuFlags) -> Self {
        Self {
            cpu,
            high_bit_depth: false,
        }
    }

    /// Same configuration with `high_bit_depth` set.
    pub const fn with_high_bit_depth(self, high_bit_depth: bool) -> Self {
        Self {
            high_bit_depth,
            ..self
        }
    }
}

/// A struct of kernel slots filled portable-first, then per backend.
pub trait DispatchTable: Sized {
    /// Table name for logs.
    const NAME: &'static str;

    /// Table with every slot set to its portable kernel.
    fn portable(config: &DspConfig) -> Self;

    /// Overwrites the slots `backend` accelerates.
    ///
    /// Slots the backend does not provide are left untouched.
    fn apply_backend(&mut self, backend: Backend, config: &DspConfig);

    /// Portable table, then every enabled backend in priority order.
    fn build(config: &DspConfig) -> Self {
        let mut table = Self::portable(config);
        for backend in Backend::enabled(config.cpu) {
            table.apply_backend(backend, config);
            debug!(table = Self::NAME, %backend, high_bit_depth = config.high_bit_depth, "backend applied");
        }
        table
    }
}
