//! Technique overhead benchmark.
//!
//! Measures the runtime cost each checksum placement adds on top of the
//! checksum-free baseline, across matrix sizes.
//!
//! # Usage:
//! ```bash
//! # Run all technique benchmarks
//! cargo bench --bench techniques
//!
//! # Run a single size group
//! cargo bench --bench techniques -- mmm_128
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigmat::{checksummed_multiply, Matrix, Technique};

/// Placement sweep: baseline, the three XOR placements, the strongest
/// scalar technique, and their vectorized counterparts.
const TECHNIQUES: [Technique; 8] = [
    Technique::NoDc,
    Technique::XorExternal,
    Technique::XorIntermediate,
    Technique::XorInternal,
    Technique::CrcInternal,
    Technique::SimdNoDc,
    Technique::SimdXorInternal,
    Technique::SimdCrcInternal,
];

fn bench_technique_overhead(c: &mut Criterion) {
    let sizes = [(64usize, 64usize, 64usize), (128, 128, 128), (32, 29, 144)];

    for (m, n, k) in sizes {
        let a = Matrix::random(m, k, 1);
        let b = Matrix::random(k, n, 2);
        let mut out = Matrix::zeroed(m, n);

        let mut group = c.benchmark_group(format!("mmm_{m}x{n}x{k}"));
        for technique in TECHNIQUES {
            group.bench_function(technique.name(), |bencher| {
                bencher.iter(|| {
                    out.fill_zero();
                    let signature = checksummed_multiply(
                        black_box(technique.id()),
                        m,
                        n,
                        k,
                        black_box(1.0),
                        a.as_slice(),
                        b.as_slice(),
                        out.as_mut_slice(),
                    )
                    .unwrap();
                    black_box(signature)
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_technique_overhead);
criterion_main!(benches);
