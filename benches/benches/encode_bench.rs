//! # Encoding Benchmarks
//!
//! Measures circuit construction cost per scheme as the signal grows.
//! QPAM emits a single state preparation; the other schemes emit one
//! value-setting block per addressed position.
//!
//! Run: `cargo bench --bench encode_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qar_schemes::{SchemeName, api};
use qar_schemes::utils::data::simulate_data;

fn bench_encode_mono(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_mono");

    for num_samples in [16usize, 64, 256] {
        let data = simulate_data(num_samples, 1, 42);
        for name in [SchemeName::Qpam, SchemeName::Sqpam, SchemeName::Qsm] {
            group.bench_with_input(
                BenchmarkId::new(name.as_str(), num_samples),
                &data,
                |b, data| b.iter(|| black_box(api::encode(data, name).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_encode_stereo(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_stereo");

    for num_samples in [16usize, 64] {
        let data = simulate_data(num_samples, 2, 42);
        for name in [SchemeName::Msqpam, SchemeName::Mqsm] {
            group.bench_with_input(
                BenchmarkId::new(name.as_str(), num_samples),
                &data,
                |b, data| b.iter(|| black_box(api::encode(data, name).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode_mono, bench_encode_stereo);
criterion_main!(benches);
