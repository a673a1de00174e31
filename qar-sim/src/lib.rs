//! # 🧮 qar-sim — Simulador Statevector Determinístico
//!
//! Executor padrão para circuitos de áudio quântico: evolui o vetor de
//! estado completo instrução a instrução e converte as probabilidades
//! finais em contagens inteiras pelo método dos maiores restos, sem
//! amostragem aleatória.
//!
//! O determinismo é deliberado: o erro de reconstrução passa a vir
//! apenas da discretização `probabilidade * shots`, o que torna os
//! resultados reprodutíveis entre execuções.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qar_core::SampleArray;
//! use qar_schemes::{SchemeName, api};
//!
//! let data = SampleArray::from_mono(vec![0.0, -0.25, 0.5, 0.75]);
//! let mut circuit = api::encode(&data, SchemeName::Qpam)?;
//! // sem backend explícito: roda no simulador statevector
//! let restored = qar_sim::decode(&mut circuit)?;
//! ```

pub mod decode;
pub mod executor;
pub mod statevector;

pub use decode::{decode, decode_with};
pub use executor::StatevectorExecutor;
pub use statevector::Statevector;

#[cfg(test)]
mod tests;
