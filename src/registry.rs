//! The technique registry: a closed, ordered catalogue of every kernel.
//!
//! Each technique is an immutable (id, display name, kernel) triple. The
//! numeric ids are persisted in measurement artifacts outside this crate, so
//! the catalogue order is frozen: new techniques may only ever be appended.
//!
//! Ids 0–26 are the scalar family, 27–50 the vectorized family. On builds
//! without AVX2 the vectorized ids stay valid and dispatch to the scalar
//! kernel of the same algebra and placement, so campaign artifacts remain
//! comparable across hosts.

use crate::checksum::{Crc32, Fletcher, OnesComplement, TwosComplement, Xor};
use crate::error::{self, Result};
use crate::kernels::{composite, golden, scalar};

/// The shared shape of every kernel: dimensions, alpha, A, B, C in, 32-bit
/// execution signature out.
pub type KernelFn = fn(usize, usize, usize, f32, &[f32], &[f32], &mut [f32]) -> u32;

/// Vectorized dispatch targets. On AVX2 builds these are the SIMD kernels;
/// otherwise the scalar kernels stand in under the same names.
#[cfg(avx2)]
mod vector {
    pub use crate::simd::avx2::kernels::{
        multiply as no_dc, multiply_composite, multiply_external, multiply_intermediate,
        multiply_internal,
    };
}

#[cfg(not(avx2))]
mod vector {
    pub use crate::kernels::composite::multiply_composite;
    pub use crate::kernels::golden::multiply as no_dc;
    pub use crate::kernels::scalar::{
        multiply_external, multiply_intermediate, multiply_internal,
    };
}

/// One entry of the technique catalogue.
///
/// The discriminants are the persisted technique ids; their order mirrors
/// the measurement campaigns this crate descends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Technique {
    /// Checksum-free baseline.
    NoDc = 0,
    /// Checksum-free baseline, hoisted-index variant.
    NoDcOpt = 1,

    XorExternal = 2,
    XorIntermediate = 3,
    XorInternal = 4,

    OnesExternal = 5,
    OnesIntermediate = 6,
    OnesInternal = 7,

    TwosExternal = 8,
    TwosIntermediate = 9,
    TwosInternal = 10,

    FletcherExternal = 11,
    FletcherIntermediate = 12,
    FletcherInternal = 13,

    CrcExternal = 14,
    CrcIntermediate = 15,
    CrcInternal = 16,

    XorFlet = 17,
    XorCrc = 18,
    OnesFlet = 19,
    OnesCrc = 20,
    TwosFlet = 21,
    TwosCrc = 22,
    FletCrc = 23,

    /// Three-stream XOR internal chained into CRC per term.
    Comb = 24,
    /// Single shared XOR accumulator chained into CRC per term.
    CrcIntermediateComb = 25,
    /// Single shared XOR accumulator chained into CRC per element.
    CrcInternalComb = 26,

    SimdNoDc = 27,

    SimdXorExternal = 28,
    SimdXorIntermediate = 29,
    SimdXorInternal = 30,

    SimdOnesExternal = 31,
    SimdOnesIntermediate = 32,
    SimdOnesInternal = 33,

    SimdTwosExternal = 34,
    SimdTwosIntermediate = 35,
    SimdTwosInternal = 36,

    SimdFletcherExternal = 37,
    SimdFletcherIntermediate = 38,
    SimdFletcherInternal = 39,

    SimdCrcExternal = 40,
    SimdCrcIntermediate = 41,
    SimdCrcInternal = 42,

    SimdXorFlet = 43,
    SimdXorCrc = 44,
    SimdOnesFlet = 45,
    SimdOnesCrc = 46,
    SimdTwosFlet = 47,
    SimdTwosCrc = 48,
    SimdFletCrc = 49,

    /// Final catalogue slot; runs the scalar comb kernel (kept that way for
    /// compatibility with existing campaign artifacts).
    SimdComb = 50,
}

/// Number of catalogue entries.
pub const TECHNIQUE_COUNT: usize = 51;

impl Technique {
    /// Every technique, in catalogue (id) order.
    pub const ALL: [Technique; TECHNIQUE_COUNT] = [
        Technique::NoDc,
        Technique::NoDcOpt,
        Technique::XorExternal,
        Technique::XorIntermediate,
        Technique::XorInternal,
        Technique::OnesExternal,
        Technique::OnesIntermediate,
        Technique::OnesInternal,
        Technique::TwosExternal,
        Technique::TwosIntermediate,
        Technique::TwosInternal,
        Technique::FletcherExternal,
        Technique::FletcherIntermediate,
        Technique::FletcherInternal,
        Technique::CrcExternal,
        Technique::CrcIntermediate,
        Technique::CrcInternal,
        Technique::XorFlet,
        Technique::XorCrc,
        Technique::OnesFlet,
        Technique::OnesCrc,
        Technique::TwosFlet,
        Technique::TwosCrc,
        Technique::FletCrc,
        Technique::Comb,
        Technique::CrcIntermediateComb,
        Technique::CrcInternalComb,
        Technique::SimdNoDc,
        Technique::SimdXorExternal,
        Technique::SimdXorIntermediate,
        Technique::SimdXorInternal,
        Technique::SimdOnesExternal,
        Technique::SimdOnesIntermediate,
        Technique::SimdOnesInternal,
        Technique::SimdTwosExternal,
        Technique::SimdTwosIntermediate,
        Technique::SimdTwosInternal,
        Technique::SimdFletcherExternal,
        Technique::SimdFletcherIntermediate,
        Technique::SimdFletcherInternal,
        Technique::SimdCrcExternal,
        Technique::SimdCrcIntermediate,
        Technique::SimdCrcInternal,
        Technique::SimdXorFlet,
        Technique::SimdXorCrc,
        Technique::SimdOnesFlet,
        Technique::SimdOnesCrc,
        Technique::SimdTwosFlet,
        Technique::SimdTwosCrc,
        Technique::SimdFletCrc,
        Technique::SimdComb,
    ];

    /// The persisted numeric id of this technique.
    #[inline]
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Resolves a persisted id back to its technique.
    pub fn from_id(id: u32) -> Option<Technique> {
        Technique::ALL.iter().copied().find(|t| t.id() == id)
    }

    /// Stable display name, as written into campaign reports.
    pub fn name(self) -> &'static str {
        match self {
            Technique::NoDc => "no_dc",
            Technique::NoDcOpt => "no_dc_opt",
            Technique::XorExternal => "xor_external",
            Technique::XorIntermediate => "xor_intermediate",
            Technique::XorInternal => "xor_internal",
            Technique::OnesExternal => "ones_external",
            Technique::OnesIntermediate => "ones_intermediate",
            Technique::OnesInternal => "ones_internal",
            Technique::TwosExternal => "twos_external",
            Technique::TwosIntermediate => "twos_intermediate",
            Technique::TwosInternal => "twos_internal",
            Technique::FletcherExternal => "fletcher_external",
            Technique::FletcherIntermediate => "fletcher_intermediate",
            Technique::FletcherInternal => "fletcher_internal",
            Technique::CrcExternal => "crc_external",
            Technique::CrcIntermediate => "crc_intermediate",
            Technique::CrcInternal => "crc_internal",
            Technique::XorFlet => "xor_flet",
            Technique::XorCrc => "xor_crc",
            Technique::OnesFlet => "ones_flet",
            Technique::OnesCrc => "ones_crc",
            Technique::TwosFlet => "twos_flet",
            Technique::TwosCrc => "twos_crc",
            Technique::FletCrc => "flet_crc",
            Technique::Comb => "comb",
            Technique::CrcIntermediateComb => "crc_intermediate_comb",
            Technique::CrcInternalComb => "crc_internal_comb",
            Technique::SimdNoDc => "simd_no_dc",
            Technique::SimdXorExternal => "simd_xor_external",
            Technique::SimdXorIntermediate => "simd_xor_intermediate",
            Technique::SimdXorInternal => "simd_xor_internal",
            Technique::SimdOnesExternal => "simd_ones_external",
            Technique::SimdOnesIntermediate => "simd_ones_intermediate",
            Technique::SimdOnesInternal => "simd_ones_internal",
            Technique::SimdTwosExternal => "simd_twos_external",
            Technique::SimdTwosIntermediate => "simd_twos_intermediate",
            Technique::SimdTwosInternal => "simd_twos_internal",
            Technique::SimdFletcherExternal => "simd_fletcher_external",
            Technique::SimdFletcherIntermediate => "simd_fletcher_intermediate",
            Technique::SimdFletcherInternal => "simd_fletcher_internal",
            Technique::SimdCrcExternal => "simd_crc_external",
            Technique::SimdCrcIntermediate => "simd_crc_intermediate",
            Technique::SimdCrcInternal => "simd_crc_internal",
            Technique::SimdXorFlet => "simd_xor_flet",
            Technique::SimdXorCrc => "simd_xor_crc",
            Technique::SimdOnesFlet => "simd_ones_flet",
            Technique::SimdOnesCrc => "simd_ones_crc",
            Technique::SimdTwosFlet => "simd_twos_flet",
            Technique::SimdTwosCrc => "simd_twos_crc",
            Technique::SimdFletCrc => "simd_flet_crc",
            Technique::SimdComb => "simd_comb",
        }
    }

    /// The kernel implementing this technique.
    pub fn kernel(self) -> KernelFn {
        match self {
            Technique::NoDc => golden::multiply,
            Technique::NoDcOpt => golden::multiply_hoisted,

            Technique::XorExternal => scalar::multiply_external::<Xor>,
            Technique::XorIntermediate => scalar::multiply_intermediate::<Xor>,
            Technique::XorInternal => scalar::multiply_internal::<Xor>,

            Technique::OnesExternal => scalar::multiply_external::<OnesComplement>,
            Technique::OnesIntermediate => scalar::multiply_intermediate::<OnesComplement>,
            Technique::OnesInternal => scalar::multiply_internal::<OnesComplement>,

            Technique::TwosExternal => scalar::multiply_external::<TwosComplement>,
            Technique::TwosIntermediate => scalar::multiply_intermediate::<TwosComplement>,
            Technique::TwosInternal => scalar::multiply_internal::<TwosComplement>,

            Technique::FletcherExternal => scalar::multiply_external::<Fletcher>,
            Technique::FletcherIntermediate => scalar::multiply_intermediate::<Fletcher>,
            Technique::FletcherInternal => scalar::multiply_internal::<Fletcher>,

            Technique::CrcExternal => scalar::multiply_external::<Crc32>,
            Technique::CrcIntermediate => scalar::multiply_intermediate::<Crc32>,
            Technique::CrcInternal => scalar::multiply_internal::<Crc32>,

            Technique::XorFlet => composite::multiply_composite::<Xor, Fletcher>,
            Technique::XorCrc => composite::multiply_composite::<Xor, Crc32>,
            Technique::OnesFlet => composite::multiply_composite::<OnesComplement, Fletcher>,
            Technique::OnesCrc => composite::multiply_composite::<OnesComplement, Crc32>,
            Technique::TwosFlet => composite::multiply_composite::<TwosComplement, Fletcher>,
            Technique::TwosCrc => composite::multiply_composite::<TwosComplement, Crc32>,
            Technique::FletCrc => composite::multiply_composite::<Fletcher, Crc32>,

            Technique::Comb => composite::multiply_composite::<Xor, Crc32>,
            Technique::CrcIntermediateComb => scalar::multiply_fused_intermediate,
            Technique::CrcInternalComb => scalar::multiply_fused_internal,

            Technique::SimdNoDc => vector::no_dc,

            Technique::SimdXorExternal => vector::multiply_external::<Xor>,
            Technique::SimdXorIntermediate => vector::multiply_intermediate::<Xor>,
            Technique::SimdXorInternal => vector::multiply_internal::<Xor>,

            Technique::SimdOnesExternal => vector::multiply_external::<OnesComplement>,
            Technique::SimdOnesIntermediate => vector::multiply_intermediate::<OnesComplement>,
            Technique::SimdOnesInternal => vector::multiply_internal::<OnesComplement>,

            Technique::SimdTwosExternal => vector::multiply_external::<TwosComplement>,
            Technique::SimdTwosIntermediate => vector::multiply_intermediate::<TwosComplement>,
            Technique::SimdTwosInternal => vector::multiply_internal::<TwosComplement>,

            Technique::SimdFletcherExternal => vector::multiply_external::<Fletcher>,
            Technique::SimdFletcherIntermediate => vector::multiply_intermediate::<Fletcher>,
            Technique::SimdFletcherInternal => vector::multiply_internal::<Fletcher>,

            Technique::SimdCrcExternal => vector::multiply_external::<Crc32>,
            Technique::SimdCrcIntermediate => vector::multiply_intermediate::<Crc32>,
            Technique::SimdCrcInternal => vector::multiply_internal::<Crc32>,

            Technique::SimdXorFlet => vector::multiply_composite::<Xor, Fletcher>,
            Technique::SimdXorCrc => vector::multiply_composite::<Xor, Crc32>,
            Technique::SimdOnesFlet => vector::multiply_composite::<OnesComplement, Fletcher>,
            Technique::SimdOnesCrc => vector::multiply_composite::<OnesComplement, Crc32>,
            Technique::SimdTwosFlet => vector::multiply_composite::<TwosComplement, Fletcher>,
            Technique::SimdTwosCrc => vector::multiply_composite::<TwosComplement, Crc32>,
            Technique::SimdFletCrc => vector::multiply_composite::<Fletcher, Crc32>,

            Technique::SimdComb => composite::multiply_composite::<Xor, Crc32>,
        }
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the checksum-free reference multiply: `C += alpha·A·B`.
///
/// C is accumulated into; zero it first for a fresh product. Matrices are
/// row-major: A is m×k, B is k×n, C is m×n.
pub fn golden_multiply(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> Result<()> {
    error::validate(m, n, k, alpha, a, b, c)?;
    golden::multiply(m, n, k, alpha, a, b, c);
    Ok(())
}

/// Runs the technique with the given id and returns its execution signature.
///
/// The numeric result in C is identical to [`golden_multiply`] for every
/// technique; only the signature differs. C is accumulated into; zero it
/// first for a fresh product.
pub fn checksummed_multiply(
    technique_id: u32,
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> Result<u32> {
    let technique =
        Technique::from_id(technique_id).ok_or_else(|| error::unknown_technique(technique_id))?;
    error::validate(m, n, k, alpha, a, b, c)?;
    Ok(technique.kernel()(m, n, k, alpha, a, b, c))
}
