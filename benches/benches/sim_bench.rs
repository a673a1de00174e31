//! # Simulator Benchmarks
//!
//! Measures statevector evolution cost by qubit count. Every extra
//! qubit doubles the state, so the curve should be exponential.
//!
//! Run: `cargo bench --bench sim_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qar_core::{Executor, QuantumCircuit, QuantumRegister};
use qar_sim::StatevectorExecutor;

fn uniform_circuit(num_qubits: usize) -> QuantumCircuit {
    let mut circuit = QuantumCircuit::new("bench");
    let time = circuit.add_register(QuantumRegister::new("time", num_qubits));
    circuit
        .h_register(time)
        .unwrap_or_else(|_| unreachable!("register was just added"));
    circuit.measure_all();
    circuit
}

fn bench_statevector(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector");
    let executor = StatevectorExecutor::new();

    for num_qubits in [4usize, 8, 12, 16] {
        let circuit = uniform_circuit(num_qubits);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &circuit,
            |b, circuit| b.iter(|| black_box(executor.execute(circuit, 4000).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_statevector);
criterion_main!(benches);
