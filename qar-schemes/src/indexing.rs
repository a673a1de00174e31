//! Endereçamento por índice via inversões X temporárias
//!
//! Primitiva compartilhada por todos os esquemas com laço de
//! amostras: para ativar a operação de escrita apenas quando os
//! registradores de índice valem `i`, inverte-se (X) cada qubit de
//! controle cujo bit em `i` é 0, aplica-se a operação controlada em
//! todos os qubits de índice, e desfazem-se as inversões.

use qar_core::QuantumCircuit;

/// Qubits de controle do circuito: todos os registradores acima do
/// registrador de valor (channel e time), em ordem de significância
/// crescente
pub fn control_qubits(circuit: &QuantumCircuit) -> Vec<usize> {
    let value_size = circuit.qregs().first().map(|r| r.size).unwrap_or(0);
    (value_size..circuit.num_qubits()).collect()
}

/// Inverte os qubits de controle cujo bit correspondente de `index` é 0
pub fn apply_x_at_index(circuit: &mut QuantumCircuit, index: usize) {
    for (position, qubit) in control_qubits(circuit).into_iter().enumerate() {
        if (index >> position) & 1 == 0 {
            circuit.x(qubit);
        }
    }
}

/// Envolve uma operação de escrita de valor com o endereçamento do
/// índice: barreira, inversões, operação, inversões desfeitas
pub fn with_index_controls<F>(circuit: &mut QuantumCircuit, index: usize, value_setting: F)
where
    F: FnOnce(&mut QuantumCircuit),
{
    circuit.barrier();
    apply_x_at_index(circuit, index);
    value_setting(circuit);
    apply_x_at_index(circuit, index);
}
