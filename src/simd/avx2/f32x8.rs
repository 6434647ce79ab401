//! AVX2 8-lane f32 SIMD vector implementation.
//!
//! `F32x8` wraps Intel's AVX2 `__m256` register to perform vectorized
//! operations on 8 single-precision floating-point values at once. Only the
//! operations the multiply kernels need are exposed: broadcast, unaligned
//! load/store, lane-wise multiply and add, and the reinterpretation of the
//! lanes as packed 32-bit integers for checksum absorption.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Compilation**: the build script enables `-C target-feature=+avx2`
//!   whenever this module is compiled, so the intrinsics below are always
//!   available at runtime.
//!
//! The kernels walk rows of unaligned caller-supplied buffers, so all loads
//! and stores use the unaligned forms (`_mm256_loadu_ps` /
//! `_mm256_storeu_ps`).

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

impl F32x8 {
    /// Broadcasts `value` into all 8 lanes.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        F32x8 {
            elements: unsafe { _mm256_set1_ps(value) },
        }
    }

    /// Loads 8 consecutive f32 values starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of 8 f32 values. No alignment is
    /// required.
    #[inline(always)]
    pub unsafe fn load_unaligned(ptr: *const f32) -> Self {
        F32x8 {
            elements: _mm256_loadu_ps(ptr),
        }
    }

    /// Stores the 8 lanes to consecutive f32 slots starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of 8 f32 values. No alignment is
    /// required.
    #[inline(always)]
    pub unsafe fn store_unaligned_at(self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements);
    }

    /// Lane-wise multiplication.
    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        F32x8 {
            elements: unsafe { _mm256_mul_ps(self.elements, rhs.elements) },
        }
    }

    /// Lane-wise addition.
    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        F32x8 {
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }

    /// The IEEE754 bit patterns of the 8 lanes as a packed integer vector.
    ///
    /// A register-level cast, not a conversion; this is the vector analogue
    /// of [`crate::checksum::word_of`].
    #[inline(always)]
    pub fn to_bits(self) -> __m256i {
        unsafe { _mm256_castps_si256(self.elements) }
    }

    /// Copies the lanes out to an array, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { _mm256_storeu_ps(out.as_mut_ptr(), self.elements) };
        out
    }
}
