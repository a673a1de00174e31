//! Testes integrados para qar-core

use crate::*;

#[test]
fn test_circuit_carries_metadata() {
    let mut circuit = QuantumCircuit::new("QPAM");
    circuit.add_register(QuantumRegister::new("amplitude", 0));
    circuit.add_register(QuantumRegister::new("time", 3));
    circuit.metadata.num_samples = Some(7);
    circuit.metadata.norm_factor = Some(1.9);

    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.metadata.require_num_samples().unwrap(), 7);
    assert_eq!(circuit.metadata.require_norm_factor().unwrap(), 1.9);
}

#[test]
fn test_result_echoes_metadata() {
    let mut metadata = CircuitMetadata::new();
    metadata.scheme = Some("qsm".to_string());
    metadata.num_samples = Some(8);
    metadata.num_qubits = Some(vec![3, 3]);

    let counts = Counts::from([("101 100", 122), ("111 000", 125)]);
    let result = ExecutionResult::new(counts, 4000, metadata.clone());

    assert_eq!(result.shots(), 4000);
    assert_eq!(result.metadata(), &metadata);
    assert_eq!(result.get_counts().get("101100"), 122);
}

#[test]
fn test_circuit_serde_roundtrip() {
    let mut circuit = QuantumCircuit::new("SQPAM");
    circuit.add_register(QuantumRegister::new("amplitude", 1));
    circuit.add_register(QuantumRegister::new("time", 2));
    circuit.h_register(1).unwrap();
    circuit.cry(1.25, vec![1, 2], 0);
    circuit.measure_all();

    let json = serde_json::to_string(&circuit).unwrap();
    let back: QuantumCircuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, circuit);
}

#[test]
fn test_instruction_names() {
    assert_eq!(Instruction::Barrier.name(), "barrier");
    assert_eq!(Instruction::Hadamard { qubit: 0 }.name(), "h");
    assert!(Instruction::Measure { qubit: 0, clbit: 0 }.is_measurement());
}
