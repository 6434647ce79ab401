//! Scalar matrix-multiplication kernels.
//!
//! Every kernel in this module computes the same multiply — `C += alpha·A·B`
//! over row-major f32 buffers, in i-k-j loop order with `alpha * A[i][k]`
//! hoisted out of the innermost loop — and differs only in where checksum
//! absorption is spliced into the loop nest:
//!
//! - **external**: once per i-row, folding the last A/B/C values the row
//!   observed. Cheapest, weakest: most of the row never touches the
//!   signature.
//! - **intermediate**: once per (i, k) dot-product term — the A term plus
//!   the last B/C values of that term.
//! - **internal**: every B/C value at every (i, k, j) step. Full coverage,
//!   highest overhead.
//!
//! Composite kernels chain two algebras: the first runs at internal
//! placement, and once per (i, k) its three stream states collapse to a
//! word that feeds the second algebra. The fused variants share a single
//! XOR accumulator across all three streams before chaining into CRC.
//!
//! Checksum bookkeeping never changes what is written to C; the golden
//! kernels and every checksummed kernel produce bit-identical results.

pub mod composite;
pub mod golden;
pub mod scalar;
