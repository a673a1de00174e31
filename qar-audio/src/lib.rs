//! # 🔊 qar-audio — Entrada e Saída de Áudio Digital
//!
//! Ponte entre arquivos WAV e o contêiner de amostras usado pelos
//! esquemas: leitura normalizada para [-1, 1] (qualquer profundidade
//! PCM ou float), escrita em PCM de 16 bits e redução opcional para
//! mono.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qar_audio::{read_wav_mono, write_wav};
//!
//! let signal = read_wav_mono("input.wav")?;
//! // ... codifica, executa e decodifica ...
//! write_wav("restored.wav", &restored, signal.sample_rate)?;
//! ```

pub mod error;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use wav::{WavSignal, read_wav, read_wav_mono, write_wav};
