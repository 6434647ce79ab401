//! SIMD kernel implementations.
//!
//! The `avx2` module is compiled only when the build script detects AVX2 on
//! the build host (`cfg(avx2)`). On other hosts the crate builds in fallback
//! mode and the registry transparently maps the vectorized technique ids to
//! their scalar counterparts, keeping the technique catalogue stable across
//! platforms.

#[cfg(avx2)]
pub mod avx2;
