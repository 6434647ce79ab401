//! Checksummed matrix-matrix multiplication kernels.
//!
//! sigmat multiplies dense single-precision matrices (`C += alpha·A·B`,
//! row-major, naive i-k-j loop order) while folding the data the multiply
//! touches into a 32-bit *execution signature*. Comparing a run's signature
//! against a golden value detects silent computational faults — bit flips,
//! transient errors — that a plain multiply would propagate without a trace.
//!
//! The crate is the measurement core of a fault-detection benchmark: a
//! catalogue of kernels crossing five checksum algebras (XOR, one's- and
//! two's-complement addition, Fletcher, CRC-32) with three loop placements
//! (external / intermediate / internal), in scalar and 8-lane AVX2 form,
//! plus two-stage composite pipelines. Campaign drivers select kernels by
//! stable numeric id through the [`Technique`] registry.
//!
//! ```
//! use sigmat::{checksummed_multiply, golden_multiply, Technique};
//!
//! let a = vec![1.0f32, 2.0, 3.0, 4.0]; // 2×2
//! let b = vec![5.0f32, 6.0, 7.0, 8.0]; // 2×2
//!
//! let mut c_ref = vec![0.0f32; 4];
//! golden_multiply(2, 2, 2, 1.0, &a, &b, &mut c_ref).unwrap();
//!
//! let mut c = vec![0.0f32; 4];
//! let signature =
//!     checksummed_multiply(Technique::XorInternal.id(), 2, 2, 2, 1.0, &a, &b, &mut c).unwrap();
//!
//! assert_eq!(c, c_ref); // checksumming never changes the product
//! let _ = signature; // compared against a golden signature by the campaign
//! ```
//!
//! Signatures are deterministic: identical inputs under an identical
//! technique produce bit-for-bit identical signatures, on every build. The
//! kernels are synchronous, allocation-free and single-threaded; the only
//! state they touch is the C buffer they are handed.

pub mod checksum;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod registry;
pub mod simd;

pub use error::{Result, SigmatError};
pub use matrix::Matrix;
pub use registry::{checksummed_multiply, golden_multiply, KernelFn, Technique, TECHNIQUE_COUNT};
