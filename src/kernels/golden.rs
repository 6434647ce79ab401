//! Checksum-free reference kernels.
//!
//! The golden kernels produce the numerically correct result every
//! checksummed variant is validated against, and seed the checksum-free
//! timing baseline. They return a constant zero signature so they can share
//! the registry's kernel signature.

/// Baseline i-k-j multiply, indices written out.
///
/// The k loop sits above the j loop so `alpha * A[i][k]` is computed once
/// per dot-product term; the innermost loop then walks B's row and C's row
/// with stride 1.
pub fn multiply(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            for j in 0..n {
                c[i * n + j] += a_part * b[kk * n + j];
            }
        }
    }
    0
}

/// Baseline multiply with row slices hoisted out of the inner loops.
///
/// Same arithmetic as [`multiply`], expressed over per-row subslices so the
/// inner loop carries no index arithmetic. Results are bit-identical.
pub fn multiply_hoisted(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for (c_row, a_row) in c.chunks_exact_mut(n).zip(a.chunks_exact(k)).take(m) {
        for (&a_ik, b_row) in a_row.iter().zip(b.chunks_exact(n)) {
            let a_part = alpha * a_ik;
            for (c_ij, &b_kj) in c_row.iter_mut().zip(b_row.iter()) {
                *c_ij += a_part * b_kj;
            }
        }
    }
    0
}
