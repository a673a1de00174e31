//! Metadados de decodificação anexados ao circuito
//!
//! Criados na codificação, ecoados pelo executor junto ao resultado e
//! consumidos exatamente uma vez na decodificação. Sem eles não é
//! possível desfazer padding, quantização ou normalização.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Metadados que viajam com o circuito (e com o resultado da execução)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitMetadata {
    /// Nome do esquema que codificou o circuito (ex.: "qpam")
    pub scheme: Option<String>,
    /// Número de amostras original, antes do padding
    pub num_samples: Option<usize>,
    /// Número de canais original, antes do padding
    pub num_channels: Option<usize>,
    /// Tamanho de cada registrador, na ordem (time, [channel,] value)
    pub num_qubits: Option<Vec<usize>>,
    /// Fator de norma do QPAM
    pub norm_factor: Option<f64>,
}

impl CircuitMetadata {
    /// Metadados vazios
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_num_samples(&self) -> CoreResult<usize> {
        self.num_samples
            .ok_or(CoreError::MissingMetadata("num_samples"))
    }

    pub fn require_num_channels(&self) -> CoreResult<usize> {
        self.num_channels
            .ok_or(CoreError::MissingMetadata("num_channels"))
    }

    pub fn require_num_qubits(&self) -> CoreResult<&[usize]> {
        self.num_qubits
            .as_deref()
            .ok_or(CoreError::MissingMetadata("num_qubits"))
    }

    pub fn require_norm_factor(&self) -> CoreResult<f64> {
        self.norm_factor
            .ok_or(CoreError::MissingMetadata("norm_factor"))
    }

    pub fn require_scheme(&self) -> CoreResult<&str> {
        self.scheme
            .as_deref()
            .ok_or(CoreError::MissingMetadata("scheme"))
    }
}
