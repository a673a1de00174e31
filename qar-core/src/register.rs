//! Registradores quânticos e clássicos

use serde::{Deserialize, Serialize};

/// Grupo nomeado e ordenado de qubits com um papel semântico
/// (time, channel ou amplitude)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumRegister {
    pub label: String,
    pub size: usize,
}

impl QuantumRegister {
    /// Cria novo registrador quântico
    pub fn new(label: impl Into<String>, size: usize) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }
}

/// Registrador de bits clássicos que recebe as medições de um
/// registrador quântico correspondente
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalRegister {
    pub label: String,
    pub size: usize,
}

impl ClassicalRegister {
    /// Cria novo registrador clássico
    pub fn new(label: impl Into<String>, size: usize) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }

    /// Rótulo de medição derivado de um registrador quântico
    /// ("time" → "ct", "channel" → "cc", "amplitude" → "ca")
    pub fn label_for(qreg: &QuantumRegister) -> String {
        match qreg.label.chars().next() {
            Some(first) => format!("c{first}"),
            None => "c".to_string(),
        }
    }
}
