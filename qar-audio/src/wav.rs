//! Leitura e escrita de arquivos WAV
//!
//! A leitura normaliza qualquer profundidade PCM inteira (e float) para
//! amostras em [-1, 1]; a escrita sempre emite PCM de 16 bits, com
//! saturação nos extremos. Nenhuma reamostragem acontece aqui: a taxa
//! de amostragem só viaja junto para a escrita posterior.

use std::path::Path;

use qar_core::SampleArray;

use crate::error::{AudioError, AudioResult};

/// Sinal lido de um WAV, com a taxa de amostragem original
#[derive(Debug, Clone, PartialEq)]
pub struct WavSignal {
    pub data: SampleArray,
    pub sample_rate: u32,
}

/// Lê um arquivo WAV como amostras normalizadas em [-1, 1]
pub fn read_wav(path: impl AsRef<Path>) -> AudioResult<WavSignal> {
    let mut reader = hound::WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let num_channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    // frames completos apenas
    let num_samples = interleaved.len() / num_channels;
    let channels: Vec<Vec<f64>> = (0..num_channels)
        .map(|c| {
            interleaved
                .iter()
                .skip(c)
                .step_by(num_channels)
                .take(num_samples)
                .copied()
                .collect()
        })
        .collect();
    tracing::debug!(
        path = %path.as_ref().display(),
        channels = num_channels,
        samples = num_samples,
        sample_rate = spec.sample_rate,
        "read wav file"
    );
    Ok(WavSignal {
        data: SampleArray::from_channels(channels)?,
        sample_rate: spec.sample_rate,
    })
}

/// Lê um WAV reduzido a mono pela média dos canais
pub fn read_wav_mono(path: impl AsRef<Path>) -> AudioResult<WavSignal> {
    let signal = read_wav(path)?;
    Ok(WavSignal {
        data: signal.data.downmix_mono(),
        sample_rate: signal.sample_rate,
    })
}

/// Escreve amostras como WAV PCM de 16 bits, saturando fora de [-1, 1]
pub fn write_wav(
    path: impl AsRef<Path>,
    data: &SampleArray,
    sample_rate: u32,
) -> AudioResult<()> {
    if data.is_empty() {
        return Err(AudioError::EmptySignal);
    }
    let spec = hound::WavSpec {
        channels: data.num_channels() as u16,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for t in 0..data.num_samples() {
        for c in 0..data.num_channels() {
            let sample = data.get(c, t).clamp(-1.0, 1.0);
            writer.write_sample((sample * i16::MAX as f64).round() as i16)?;
        }
    }
    writer.finalize()?;
    tracing::debug!(
        path = %path.as_ref().display(),
        channels = data.num_channels(),
        samples = data.num_samples(),
        "wrote wav file"
    );
    Ok(())
}
