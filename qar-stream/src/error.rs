//! Tipos de erro para qar-stream

use qar_core::CoreError;
use qar_schemes::SchemeError;
use thiserror::Error;

/// Resultado customizado para o pipeline em chunks
pub type StreamResult<T> = Result<T, StreamError>;

/// Erros do processamento em chunks
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    #[error("Chunk size must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
