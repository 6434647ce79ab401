//! Two-stage composite kernels.
//!
//! A composite runs its first algebra `F` at internal placement over the
//! three operand streams, and once per (i, k) dot-product term collapses the
//! three running states into a 32-bit word (`F::mix`) that is absorbed into
//! the second algebra `S` — a pipeline, not a union of two signatures. The
//! kernel's signature is the second stage's finalized state.
//!
//! The reference study pairs a cheap lane-friendly first stage (XOR,
//! one's/two's-complement, Fletcher) with a stronger mixing second stage
//! (Fletcher or CRC).

use crate::checksum::{word_of, ChecksumAlgebra};

/// First algebra internal, second algebra fed once per (i, k).
pub fn multiply_composite<F: ChecksumAlgebra, S: ChecksumAlgebra>(
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

    let mut first_a = F::init();
    let mut first_b = F::init();
    let mut first_c = F::init();
    let mut second = S::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            F::absorb(&mut first_a, word_of(a_part));
            for j in 0..n {
                let idx = i * n + j;
                let b_val = b[kk * n + j];
                c[idx] += a_part * b_val;
                F::absorb(&mut first_b, word_of(b_val));
                F::absorb(&mut first_c, word_of(c[idx]));
            }
            S::absorb(&mut second, F::mix(first_a, first_b, first_c));
        }
    }
    S::finalize(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{Crc32, Fletcher, Xor};
    use crate::kernels::{golden, scalar};

    const A2: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    const B2: [f32; 4] = [5.0, 6.0, 7.0, 8.0];

    #[test]
    fn test_composite_preserves_result() {
        let mut expected = [0.0f32; 4];
        golden::multiply(2, 2, 2, 1.0, &A2, &B2, &mut expected);

        let mut c = [0.0f32; 4];
        multiply_composite::<Xor, Fletcher>(2, 2, 2, 1.0, &A2, &B2, &mut c);
        assert_eq!(c, expected);

        let mut c = [0.0f32; 4];
        multiply_composite::<Fletcher, Crc32>(2, 2, 2, 1.0, &A2, &B2, &mut c);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_pipeline_differs_from_either_stage() {
        let mut c = [0.0f32; 4];
        let composite = multiply_composite::<Xor, Crc32>(2, 2, 2, 1.0, &A2, &B2, &mut c);

        let mut c = [0.0f32; 4];
        let xor_only = scalar::multiply_internal::<Xor>(2, 2, 2, 1.0, &A2, &B2, &mut c);

        let mut c = [0.0f32; 4];
        let crc_only = scalar::multiply_internal::<Crc32>(2, 2, 2, 1.0, &A2, &B2, &mut c);

        assert_ne!(composite, xor_only);
        assert_ne!(composite, crc_only);
    }

    #[test]
    fn test_composite_matches_manual_pipeline() {
        // Recompute xor→crc by hand from the algebra primitives on the same
        // operand stream and compare against the kernel.
        let (m, n, k) = (2usize, 3usize, 2usize);
        let a: Vec<f32> = (0..m * k).map(|x| x as f32 + 1.0).collect();
        let b: Vec<f32> = (0..k * n).map(|x| 0.5 * x as f32 - 1.0).collect();

        let mut c = vec![0.0f32; m * n];
        let kernel_sig = multiply_composite::<Xor, Crc32>(m, n, k, 1.0, &a, &b, &mut c);

        let mut shadow = vec![0.0f32; m * n];
        let mut xa = Xor::init();
        let mut xb = Xor::init();
        let mut xc = Xor::init();
        let mut crc = Crc32::init();
        for i in 0..m {
            for kk in 0..k {
                let a_part = a[i * k + kk];
                Xor::absorb(&mut xa, word_of(a_part));
                for j in 0..n {
                    let b_val = b[kk * n + j];
                    shadow[i * n + j] += a_part * b_val;
                    Xor::absorb(&mut xb, word_of(b_val));
                    Xor::absorb(&mut xc, word_of(shadow[i * n + j]));
                }
                Crc32::absorb(&mut crc, Xor::mix(xa, xb, xc));
            }
        }

        assert_eq!(kernel_sig, Crc32::finalize(crc));
    }
}
