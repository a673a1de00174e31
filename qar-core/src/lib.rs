//! # ⚛️ qar-core — Modelo de Circuito para Áudio Quântico
//!
//! Implementa o modelo de circuito compartilhado pelos esquemas de
//! representação de áudio quântico (QAR): registradores, instruções,
//! metadados de decodificação, histogramas de medição e o contrato
//! `Executor`.
//!
//! ## Convenção canônica de bits
//!
//! Os registradores são empilhados em ordem fixa:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  time     (bits mais significativos)            │
//! │  channel  (presente apenas em esquemas multi)   │
//! │  value    (bits menos significativos)           │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Um rótulo de estado-base lê `time`, depois `channel`, depois `value`,
//! da esquerda para a direita. Todo o workspace segue esta única
//! convenção.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qar_core::{QuantumCircuit, QuantumRegister};
//!
//! let mut circuit = QuantumCircuit::new("QSM");
//! circuit.add_register(QuantumRegister::new("amplitude", 3));
//! circuit.add_register(QuantumRegister::new("time", 2));
//! circuit.h_register(1);
//! circuit.measure_all();
//! ```

pub mod circuit;
pub mod counts;
pub mod error;
pub mod executor;
pub mod instruction;
pub mod metadata;
pub mod register;
pub mod result;
pub mod types;

pub use circuit::QuantumCircuit;
pub use counts::Counts;
pub use error::{CoreError, CoreResult};
pub use executor::Executor;
pub use instruction::Instruction;
pub use metadata::CircuitMetadata;
pub use register::{ClassicalRegister, QuantumRegister};
pub use result::ExecutionResult;
pub use types::SampleArray;

#[cfg(test)]
mod tests;
