//! Tipos de erro para qar-core

use thiserror::Error;

/// Resultado customizado para operações do núcleo
pub type CoreResult<T> = Result<T, CoreError>;

/// Erros que podem ocorrer no modelo de circuito e na execução
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Missing metadata entry '{0}' required for decoding")]
    MissingMetadata(&'static str),

    #[error("Register index {0} out of bounds ({1} registers)")]
    RegisterOutOfBounds(usize, usize),

    #[error("Qubit index {qubit} out of bounds ({num_qubits} qubits)")]
    QubitOutOfBounds { qubit: usize, num_qubits: usize },

    #[error("Initialize expects {expected} amplitudes, got {got}")]
    InvalidStateLength { expected: usize, got: usize },

    #[error("Channel length mismatch: channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        got: usize,
        expected: usize,
    },

    #[error("Circuit has no measurements to sample from")]
    NotMeasured,

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
