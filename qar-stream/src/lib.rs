//! # 🌊 qar-stream — Processamento de Áudio Quântico em Chunks
//!
//! Pipeline para sinais mais longos do que um circuito simulável
//! comporta: o sinal é dividido em chunks ao longo do tempo, cada chunk
//! atravessa o ciclo codifica → executa → decodifica, e as
//! reconstruções são concatenadas de volta em um único sinal.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qar_stream::{StreamConfig, stream_data};
//! use qar_schemes::SchemeName;
//! use qar_sim::StatevectorExecutor;
//!
//! let restored = stream_data(
//!     &signal,
//!     SchemeName::Qpam,
//!     &StatevectorExecutor::new(),
//!     StreamConfig::default(),
//! )?;
//! ```

pub mod buffering;
pub mod error;

pub use buffering::{
    StreamConfig, combine_chunks, get_chunks, process_chunk, process_chunks, stream_data,
};
pub use error::{StreamError, StreamResult};
