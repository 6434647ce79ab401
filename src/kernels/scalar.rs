//! Generic checksummed kernels, one per loop placement.
//!
//! Each function is the golden i-k-j multiply with absorb calls for one
//! algebra `A` spliced in at a fixed placement. Monomorphization turns the
//! algebra parameter into straight-line code, so `multiply_internal::<Xor>`
//! compiles to the same loop a hand-written XOR kernel would.
//!
//! Three accumulator states run in parallel, one per operand stream: the
//! A-term (`alpha * A[i][k]`), the B-term (`B[k][j]`) and the C-term (the
//! freshly updated `C[i][j]`). The final signature is the algebra's
//! three-stream merge.

use crate::checksum::{word_of, ChecksumAlgebra, Crc32, Xor};

/// Absorbs once per i-row: only the last A/B/C values observed for the row
/// reach the signature.
pub fn multiply_external<A: ChecksumAlgebra>(
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

    let mut state_a = A::init();
    let mut state_b = A::init();
    let mut state_c = A::init();

    let mut a_part = 0.0f32;
    let mut b_val = 0.0f32;
    let mut c_val = 0.0f32;

    for i in 0..m {
        for kk in 0..k {
            a_part = alpha * a[i * k + kk];
            for j in 0..n {
                let idx = i * n + j;
                b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                c_val = c[idx];
            }
        }
        A::absorb(&mut state_a, word_of(a_part));
        A::absorb(&mut state_b, word_of(b_val));
        A::absorb(&mut state_c, word_of(c_val));
    }
    A::merge(state_a, state_b, state_c)
}

/// Absorbs once per (i, k) dot-product term: the A term unconditionally,
/// plus the last B/C values of that term.
pub fn multiply_intermediate<A: ChecksumAlgebra>(
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

    let mut state_a = A::init();
    let mut state_b = A::init();
    let mut state_c = A::init();

    let mut b_val = 0.0f32;
    let mut c_val = 0.0f32;

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            for j in 0..n {
                let idx = i * n + j;
                b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                c_val = c[idx];
            }
            A::absorb(&mut state_a, word_of(a_part));
            A::absorb(&mut state_b, word_of(b_val));
            A::absorb(&mut state_c, word_of(c_val));
        }
    }
    A::merge(state_a, state_b, state_c)
}

/// Absorbs every B/C value at every (i, k, j) step; the A term once per
/// (i, k). Full coverage of the data the multiply touches.
pub fn multiply_internal<A: ChecksumAlgebra>(
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

    let mut state_a = A::init();
    let mut state_b = A::init();
    let mut state_c = A::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            A::absorb(&mut state_a, word_of(a_part));
            for j in 0..n {
                let idx = i * n + j;
                let b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                let c_val = c[idx];
                A::absorb(&mut state_b, word_of(b_val));
                A::absorb(&mut state_c, word_of(c_val));
            }
        }
    }
    A::merge(state_a, state_b, state_c)
}

/// Single shared XOR accumulator over all three streams, chained into CRC
/// once per (i, k) term.
pub fn multiply_fused_intermediate(
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

    let mut xor = Xor::init();
    let mut crc = Crc32::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            Xor::absorb(&mut xor, word_of(a_part));
            for j in 0..n {
                let idx = i * n + j;
                let b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                Xor::absorb(&mut xor, word_of(b_val));
                Xor::absorb(&mut xor, word_of(c[idx]));
            }
            Crc32::absorb(&mut crc, xor);
        }
    }
    Crc32::finalize(crc)
}

/// Single shared XOR accumulator over all three streams, chained into CRC at
/// every (i, k, j) step.
pub fn multiply_fused_internal(
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

    let mut xor = Xor::init();
    let mut crc = Crc32::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            Xor::absorb(&mut xor, word_of(a_part));
            for j in 0..n {
                let idx = i * n + j;
                let b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                Xor::absorb(&mut xor, word_of(b_val));
                Xor::absorb(&mut xor, word_of(c[idx]));
                Crc32::absorb(&mut crc, xor);
            }
        }
    }
    Crc32::finalize(crc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{Fletcher, OnesComplement, TwosComplement};
    use crate::kernels::golden;

    const A2: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    const B2: [f32; 4] = [5.0, 6.0, 7.0, 8.0];

    fn golden_c() -> [f32; 4] {
        let mut c = [0.0; 4];
        golden::multiply(2, 2, 2, 1.0, &A2, &B2, &mut c);
        c
    }

    #[test]
    fn test_checksum_does_not_change_result() {
        let expected = golden_c();

        macro_rules! check {
            ($kernel:expr) => {
                let mut c = [0.0f32; 4];
                $kernel(2, 2, 2, 1.0, &A2, &B2, &mut c);
                assert_eq!(c, expected);
            };
        }

        check!(multiply_external::<Xor>);
        check!(multiply_intermediate::<OnesComplement>);
        check!(multiply_internal::<TwosComplement>);
        check!(multiply_internal::<Fletcher>);
        check!(multiply_internal::<Crc32>);
        check!(multiply_fused_intermediate);
        check!(multiply_fused_internal);
    }

    #[test]
    fn test_placements_observe_different_streams() {
        let mut c1 = [0.0f32; 4];
        let mut c2 = [0.0f32; 4];
        let external = multiply_external::<Xor>(2, 2, 2, 1.0, &A2, &B2, &mut c1);
        let internal = multiply_internal::<Xor>(2, 2, 2, 1.0, &A2, &B2, &mut c2);

        assert_eq!(c1, c2);
        assert_ne!(external, internal);
    }

    #[test]
    fn test_external_xor_signature_by_hand() {
        // m = n = k = 2, alpha = 1: the external placement sees, per row,
        // only the last a_part (A[i][1]), the last B value (B[1][1]) and the
        // last C value (C[i][1]).
        let mut c = [0.0f32; 4];
        let sig = multiply_external::<Xor>(2, 2, 2, 1.0, &A2, &B2, &mut c);

        let state_a = 2.0f32.to_bits() ^ 4.0f32.to_bits();
        let state_b = 8.0f32.to_bits() ^ 8.0f32.to_bits();
        let state_c = c[1].to_bits() ^ c[3].to_bits();
        assert_eq!(sig, (state_a ^ state_b) ^ state_c);
    }

    #[test]
    fn test_signatures_are_deterministic() {
        for _ in 0..2 {
            let mut c = [0.0f32; 4];
            let first = multiply_internal::<Crc32>(2, 2, 2, 1.0, &A2, &B2, &mut c);
            let mut c = [0.0f32; 4];
            let second = multiply_internal::<Crc32>(2, 2, 2, 1.0, &A2, &B2, &mut c);
            assert_eq!(first, second);
        }
    }
}
