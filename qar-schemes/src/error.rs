//! Tipos de erro para qar-schemes

use qar_core::CoreError;
use thiserror::Error;

/// Resultado customizado para operações de esquema
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Erros de validação, carregamento e decodificação dos esquemas
#[derive(Debug, Clone, Error)]
pub enum SchemeError {
    #[error("Data not in range [{min}, {max}]")]
    OutOfRange { min: f64, max: f64 },

    #[error("Multi-channel not supported in {0}")]
    MultiChannelUnsupported(&'static str),

    #[error("Cannot encode empty data")]
    EmptyData,

    #[error("Unknown scheme '{0}' (available: qpam, sqpam, qsm, msqpam, mqsm)")]
    UnknownScheme(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
