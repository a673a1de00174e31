//! Conjunto de instruções dos circuitos QAR
//!
//! O conjunto é fechado: cobre exatamente as operações que os esquemas
//! de codificação emitem — superposição (H), inversão temporária de
//! bits de índice (X), escrita de valor controlada (MCX e CRY) e a
//! preparação de estado global usada pelo QPAM (Initialize).

use serde::{Deserialize, Serialize};

/// Instrução de circuito sobre índices globais de qubits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Porta Hadamard: coloca o qubit em superposição uniforme
    Hadamard { qubit: usize },

    /// Porta Pauli-X (NOT quântico)
    PauliX { qubit: usize },

    /// X multi-controlado: inverte `target` quando todos os controles
    /// estão em |1⟩
    MultiControlledX { controls: Vec<usize>, target: usize },

    /// Rotação Ry multi-controlada por `theta` sobre `target`
    ControlledRy {
        theta: f64,
        controls: Vec<usize>,
        target: usize,
    },

    /// Preparação global de estado: o vetor deve ter norma 1 e
    /// comprimento 2^n para um circuito de n qubits
    Initialize { amplitudes: Vec<f64> },

    /// Barreira (separador visual/estrutural, sem efeito no estado)
    Barrier,

    /// Medição de um qubit em um bit clássico
    Measure { qubit: usize, clbit: usize },
}

impl Instruction {
    /// Verifica se a instrução é uma medição
    pub fn is_measurement(&self) -> bool {
        matches!(self, Instruction::Measure { .. })
    }

    /// Nome curto da instrução
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Hadamard { .. } => "h",
            Instruction::PauliX { .. } => "x",
            Instruction::MultiControlledX { .. } => "mcx",
            Instruction::ControlledRy { .. } => "cry",
            Instruction::Initialize { .. } => "initialize",
            Instruction::Barrier => "barrier",
            Instruction::Measure { .. } => "measure",
        }
    }
}
