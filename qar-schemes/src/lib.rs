//! # 🎚️ qar-schemes — Esquemas de Representação de Áudio Quântico
//!
//! Implementa codificação e decodificação de áudio digital como
//! circuitos quânticos, em cinco esquemas:
//!
//! - **QPAM**   : Quantum Probability Amplitude Modulation
//! - **SQPAM**  : Single-Qubit Probability Amplitude Modulation
//! - **QSM**    : Quantum State Modulation
//! - **MSQPAM** : Multi-channel Single-Qubit Probability Amplitude Modulation
//! - **MQSM**   : Multi-channel Quantum State Modulation
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ samples → calculate → prepare_data → convert → circuito      │
//! │                                          │                   │
//! │                                   (executor externo)         │
//! │                                          │                   │
//! │ samples ← undo padding ← reconstruct ← decode_components     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cada estágio é invocável isoladamente; `encode`/`decode` apenas os
//! compõem na ordem padrão.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qar_schemes::{Qpam, Scheme, DecodeOptions};
//! use qar_core::SampleArray;
//!
//! let data = SampleArray::from_mono(vec![0.0, -0.25, 0.5, 0.75]);
//! let qpam = Qpam::new();
//! let mut circuit = qpam.encode(&data)?;
//! let decoded = qpam.decode_with(&mut circuit, &executor, DecodeOptions::default())?;
//! ```

pub mod api;
pub mod error;
pub mod indexing;
pub mod mqsm;
pub mod msqpam;
pub mod qpam;
pub mod qsm;
pub mod scheme;
pub mod sqpam;
pub mod utils;

pub use error::{SchemeError, SchemeResult};
pub use mqsm::Mqsm;
pub use msqpam::Msqpam;
pub use qpam::Qpam;
pub use qsm::Qsm;
pub use scheme::{
    DataShape, DecodeOptions, EncodeOptions, Scheme, SchemeCache, SchemeName, SchemeOptions,
    load_scheme,
};
pub use sqpam::Sqpam;
