//! # Decoding Benchmarks
//!
//! Measures the full decode path (execute + component extraction +
//! reconstruction) against the bundled statevector executor.
//!
//! Run: `cargo bench --bench decode_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qar_schemes::utils::data::simulate_data;
use qar_schemes::{DecodeOptions, SchemeName, api};
use qar_sim::StatevectorExecutor;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let executor = StatevectorExecutor::new();

    for num_samples in [16usize, 64] {
        let data = simulate_data(num_samples, 1, 42);
        for name in [SchemeName::Qpam, SchemeName::Sqpam, SchemeName::Qsm] {
            let circuit = api::encode(&data, name).unwrap();
            group.bench_with_input(
                BenchmarkId::new(name.as_str(), num_samples),
                &circuit,
                |b, circuit| {
                    b.iter(|| {
                        let mut circuit = circuit.clone();
                        black_box(
                            api::decode(&mut circuit, &executor, DecodeOptions::default())
                                .unwrap(),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
