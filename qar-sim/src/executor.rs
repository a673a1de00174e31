//! Executor statevector com contagens por maiores restos

use qar_core::{
    CoreError, CoreResult, Counts, ExecutionResult, Executor, QuantumCircuit,
};

use crate::statevector::Statevector;

/// Executor padrão: simulação exata do vetor de estado e repartição
/// determinística dos shots
///
/// Cada estado-base recebe `floor(probabilidade * shots)` ocorrências;
/// os shots restantes vão aos estados de maior resto fracionário. A
/// soma das contagens é sempre exatamente `shots`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatevectorExecutor;

impl StatevectorExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Reparte `shots` entre os estados pelo método dos maiores restos
    fn apportion(probabilities: &[f64], shots: u64) -> Vec<u64> {
        let exact: Vec<f64> = probabilities.iter().map(|&p| p * shots as f64).collect();
        let mut counts: Vec<u64> = exact.iter().map(|&e| e as u64).collect();
        let assigned: u64 = counts.iter().sum();

        let mut remainders: Vec<(usize, f64)> = exact
            .iter()
            .enumerate()
            .map(|(i, &e)| (i, e - e.floor()))
            .collect();
        // maiores restos primeiro; empates pelo menor índice
        remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        // erro de ponto flutuante acumulado pode fazer os pisos
        // ultrapassarem os shots; nesse caso nada resta a distribuir
        let missing = shots.saturating_sub(assigned) as usize;
        for &(index, _) in remainders.iter().take(missing) {
            counts[index] += 1;
        }
        counts
    }
}

impl Executor for StatevectorExecutor {
    fn execute(&self, circuit: &QuantumCircuit, shots: u64) -> CoreResult<ExecutionResult> {
        if !circuit.is_measured() {
            return Err(CoreError::NotMeasured);
        }
        tracing::debug!(
            circuit = circuit.name(),
            qubits = circuit.num_qubits(),
            shots,
            "executing circuit"
        );

        let num_qubits = circuit.num_qubits();
        let mut state = Statevector::new(num_qubits);
        for instruction in circuit.instructions() {
            state.apply(instruction)?;
        }

        let apportioned = Self::apportion(&state.probabilities(), shots);
        let mut counts = Counts::new();
        for (index, &count) in apportioned.iter().enumerate() {
            if count > 0 {
                counts.insert(&format!("{index:0num_qubits$b}"), count);
            }
        }
        Ok(ExecutionResult::new(counts, shots, circuit.metadata.clone()))
    }
}
