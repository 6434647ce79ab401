//! AVX2 implementations of the checksummed multiply.
//!
//! 256-bit vectors process 8 output elements of a C row per step; a scalar
//! tail loop covers the remaining `n % 8` columns. The multiply itself is a
//! lane-wise `mul` followed by `add` — deliberately not a fused
//! multiply-add, so the vectorized kernels produce bit-identical C matrices
//! to the scalar family.
//!
//! Checksum absorption runs on the integer view of the same registers; see
//! [`lanes`] for how each algebra accumulates across lanes and folds back to
//! a scalar signature.

pub mod f32x8;
pub mod kernels;
pub mod lanes;
