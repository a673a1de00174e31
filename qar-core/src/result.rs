//! Resultado de execução de um circuito

use serde::{Deserialize, Serialize};

use crate::counts::Counts;
use crate::metadata::CircuitMetadata;

/// Resultado retornado por um `Executor`
///
/// Além do histograma de medições, carrega o número de shots e ecoa os
/// metadados que o circuito levava na codificação — permitindo que a
/// decodificação aconteça sem acesso ao circuito original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    counts: Counts,
    shots: u64,
    metadata: CircuitMetadata,
}

impl ExecutionResult {
    /// Cria resultado a partir das contagens, shots e metadados ecoados
    pub fn new(counts: Counts, shots: u64, metadata: CircuitMetadata) -> Self {
        Self {
            counts,
            shots,
            metadata,
        }
    }

    /// Histograma de medições
    pub fn get_counts(&self) -> &Counts {
        &self.counts
    }

    /// Número de repetições da medição
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Metadados ecoados do circuito
    pub fn metadata(&self) -> &CircuitMetadata {
        &self.metadata
    }
}
