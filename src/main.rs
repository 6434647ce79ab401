//! Demo driver: runs every registered technique once and verifies it
//! against the golden kernel.
//!
//! Builds a seeded random experiment (so runs are reproducible), computes
//! the golden product, then for each catalogue entry recomputes C from a
//! zeroed buffer and checks it matches the golden result bit-for-bit while
//! printing the technique's execution signature.

use sigmat::{checksummed_multiply, golden_multiply, Matrix, Technique};

const M: usize = 32;
const N: usize = 29;
const K: usize = 144;
const ALPHA: f32 = 1.0;
const SEED: u64 = 0x5161_3A70;

fn main() {
    let a = Matrix::random(M, K, SEED);
    let b = Matrix::random(K, N, SEED + 1);

    let mut c_ref = Matrix::zeroed(M, N);
    golden_multiply(
        M,
        N,
        K,
        ALPHA,
        a.as_slice(),
        b.as_slice(),
        c_ref.as_mut_slice(),
    )
    .expect("golden multiply failed");

    println!("sigmat unit check: {M}x{K} * {K}x{N}, alpha = {ALPHA}");
    println!("{:>3}  {:<28} {:>10}  result", "id", "technique", "signature");

    let mut failures = 0u32;
    let mut c = Matrix::zeroed(M, N);

    for technique in Technique::ALL {
        c.fill_zero();
        let signature = match checksummed_multiply(
            technique.id(),
            M,
            N,
            K,
            ALPHA,
            a.as_slice(),
            b.as_slice(),
            c.as_mut_slice(),
        ) {
            Ok(signature) => signature,
            Err(e) => {
                println!("{:>3}  {:<28} {:>10}  error: {e}", technique.id(), technique, "-");
                failures += 1;
                continue;
            }
        };

        let bits_match = c
            .as_slice()
            .iter()
            .zip(c_ref.as_slice())
            .all(|(x, y)| x.to_bits() == y.to_bits());
        if !bits_match {
            failures += 1;
        }

        println!(
            "{:>3}  {:<28} 0x{signature:08X}  {}",
            technique.id(),
            technique,
            if bits_match { "ok" } else { "FAIL" }
        );
    }

    if failures == 0 {
        println!("all {} techniques match the golden result", Technique::ALL.len());
    } else {
        println!("{failures} technique(s) FAILED");
        std::process::exit(1);
    }
}
