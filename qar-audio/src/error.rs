//! Tipos de erro para qar-audio

use qar_core::CoreError;
use thiserror::Error;

/// Resultado customizado para entrada/saída de áudio
pub type AudioResult<T> = Result<T, AudioError>;

/// Erros de leitura e escrita de arquivos de áudio
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Cannot write empty signal")]
    EmptySignal,

    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
