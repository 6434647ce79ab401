//! Scalar/vector agreement at the tail boundary.
//!
//! Only meaningful on AVX2 builds; in fallback mode the vectorized ids
//! already dispatch to the scalar kernels and there is nothing to compare.
#![cfg(avx2)]

use sigmat::{checksummed_multiply, golden_multiply, Matrix, Technique};

/// n values covering every n % 8 class around one and two vector blocks.
const TAIL_WIDTHS: [usize; 7] = [1, 7, 8, 9, 15, 16, 17];

fn run(technique: Technique, m: usize, n: usize, k: usize, a: &Matrix, b: &Matrix) -> (u32, Matrix) {
    let mut c = Matrix::zeroed(m, n);
    let signature = checksummed_multiply(
        technique.id(),
        m,
        n,
        k,
        1.0,
        a.as_slice(),
        b.as_slice(),
        c.as_mut_slice(),
    )
    .unwrap();
    (signature, c)
}

#[test]
fn test_vector_results_match_golden_at_every_tail_width() {
    // mul+add lane arithmetic is the same IEEE sequence as the scalar loop,
    // so C must match bit-for-bit, whatever the tail width.
    let vector_techniques = [
        Technique::SimdNoDc,
        Technique::SimdXorExternal,
        Technique::SimdXorInternal,
        Technique::SimdOnesIntermediate,
        Technique::SimdTwosInternal,
        Technique::SimdFletcherExternal,
        Technique::SimdCrcIntermediate,
        Technique::SimdXorFlet,
        Technique::SimdFletCrc,
    ];

    for n in TAIL_WIDTHS {
        let (m, k) = (4, 5);
        let a = Matrix::random(m, k, 700 + n as u64);
        let b = Matrix::random(k, n, 800 + n as u64);

        let mut reference = Matrix::zeroed(m, n);
        golden_multiply(m, n, k, 1.0, a.as_slice(), b.as_slice(), reference.as_mut_slice())
            .unwrap();

        for technique in vector_techniques {
            let (_, c) = run(technique, m, n, k, &a, &b);
            let bits_ref: Vec<u32> = reference.as_slice().iter().map(|x| x.to_bits()).collect();
            let bits_c: Vec<u32> = c.as_slice().iter().map(|x| x.to_bits()).collect();
            assert_eq!(bits_ref, bits_c, "{technique} at n = {n}");
        }
    }
}

#[test]
fn test_xor_internal_signature_equal_scalar_vs_vector() {
    // XOR is order-independent and the internal placement observes every
    // word exactly once in both families, so the signatures coincide for
    // every tail width.
    for n in TAIL_WIDTHS {
        let (m, k) = (3, 6);
        let a = Matrix::random(m, k, 900 + n as u64);
        let b = Matrix::random(k, n, 1000 + n as u64);

        let (scalar_sig, scalar_c) = run(Technique::XorInternal, m, n, k, &a, &b);
        let (vector_sig, vector_c) = run(Technique::SimdXorInternal, m, n, k, &a, &b);

        assert_eq!(scalar_sig, vector_sig, "signature at n = {n}");
        assert_eq!(scalar_c, vector_c, "result at n = {n}");
    }
}

#[test]
fn test_vector_signatures_stable_across_runs() {
    let (m, n, k) = (5, 11, 4);
    let a = Matrix::random(m, k, 1100);
    let b = Matrix::random(k, n, 1101);

    for technique in Technique::ALL.iter().filter(|t| t.id() >= 27) {
        let (first, _) = run(*technique, m, n, k, &a, &b);
        let (second, _) = run(*technique, m, n, k, &a, &b);
        assert_eq!(first, second, "technique {technique}");
    }
}

#[test]
fn test_tail_only_width_observes_tail_stream() {
    // n < 8: the vector loop never runs, so internal-placement coverage
    // comes entirely from the tail path. A fault in B must still be caught.
    let (m, n, k) = (3, 5, 4);
    let a = Matrix::random(m, k, 1200);
    let b = Matrix::random(k, n, 1201);

    let (clean, _) = run(Technique::SimdXorInternal, m, n, k, &a, &b);

    let mut faulty = b.clone();
    let flipped = f32::from_bits(faulty.get(2, 3).to_bits() ^ (1 << 7));
    faulty.set(2, 3, flipped);

    let (dirty, _) = run(Technique::SimdXorInternal, m, n, k, &a, &faulty);
    assert_ne!(clean, dirty);
}
