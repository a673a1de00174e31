//! Contêiner de amostras de áudio digital

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Array de amostras reais, mono (1 canal) ou multicanal
/// (canais × tempo), com valores nominalmente em [-1, 1]
///
/// O armazenamento é canal-major: o canal `c` ocupa a faixa contígua
/// `[c * num_samples, (c + 1) * num_samples)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleArray {
    samples: Vec<f64>,
    num_channels: usize,
    num_samples: usize,
}

impl SampleArray {
    /// Cria array mono a partir de um vetor de amostras
    pub fn from_mono(samples: Vec<f64>) -> Self {
        let num_samples = samples.len();
        Self {
            samples,
            num_channels: if num_samples == 0 { 0 } else { 1 },
            num_samples,
        }
    }

    /// Cria array multicanal; todos os canais devem ter o mesmo
    /// comprimento
    pub fn from_channels(channels: Vec<Vec<f64>>) -> CoreResult<Self> {
        let num_channels = channels.len();
        let num_samples = channels.first().map(|c| c.len()).unwrap_or(0);
        let mut samples = Vec::with_capacity(num_channels * num_samples);
        for (index, channel) in channels.into_iter().enumerate() {
            if channel.len() != num_samples {
                return Err(CoreError::ChannelLengthMismatch {
                    channel: index,
                    got: channel.len(),
                    expected: num_samples,
                });
            }
            samples.extend(channel);
        }
        Ok(Self {
            samples,
            num_channels,
            num_samples,
        })
    }

    /// Número de canais
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Número de amostras por canal
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Verifica se o array é mono
    pub fn is_mono(&self) -> bool {
        self.num_channels <= 1
    }

    /// Verifica se o array está vazio
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Amostras do canal `c`
    pub fn channel(&self, c: usize) -> &[f64] {
        let start = c * self.num_samples;
        &self.samples[start..start + self.num_samples]
    }

    /// Itera sobre os canais
    pub fn channels(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.num_channels).map(|c| self.channel(c))
    }

    /// Amostra do canal `c` no instante `t`
    pub fn get(&self, c: usize, t: usize) -> f64 {
        self.samples[c * self.num_samples + t]
    }

    /// Visão mono, se houver exatamente um canal
    pub fn as_mono(&self) -> Option<&[f64]> {
        (self.num_channels == 1).then_some(self.samples.as_slice())
    }

    /// Cópia truncada a `n` amostras por canal (desfaz padding de tempo)
    pub fn truncate_samples(&self, n: usize) -> Self {
        let n = n.min(self.num_samples);
        let channels = self.channels().map(|c| c[..n].to_vec()).collect();
        // canais de mesmo comprimento por construção
        Self::from_channels(channels).unwrap_or_default()
    }

    /// Cópia truncada a `n` canais (desfaz padding de canais)
    pub fn truncate_channels(&self, n: usize) -> Self {
        let n = n.min(self.num_channels);
        let channels = (0..n).map(|c| self.channel(c).to_vec()).collect();
        Self::from_channels(channels).unwrap_or_default()
    }

    /// Reduz para mono pela média dos canais
    pub fn downmix_mono(&self) -> Self {
        if self.is_mono() {
            return self.clone();
        }
        let mono = (0..self.num_samples)
            .map(|t| {
                let sum: f64 = (0..self.num_channels).map(|c| self.get(c, t)).sum();
                sum / self.num_channels as f64
            })
            .collect();
        Self::from_mono(mono)
    }

    /// Concatena arrays ao longo do eixo das amostras; todos devem ter
    /// o mesmo número de canais
    pub fn concat_samples(parts: &[SampleArray]) -> CoreResult<Self> {
        let Some(first) = parts.first() else {
            return Ok(Self::default());
        };
        let num_channels = first.num_channels;
        let mut channels: Vec<Vec<f64>> = vec![Vec::new(); num_channels];
        for (index, part) in parts.iter().enumerate() {
            if part.num_channels != num_channels {
                return Err(CoreError::ChannelLengthMismatch {
                    channel: index,
                    got: part.num_channels,
                    expected: num_channels,
                });
            }
            for (c, channel) in part.channels().enumerate() {
                channels[c].extend_from_slice(channel);
            }
        }
        Self::from_channels(channels)
    }
}

impl From<Vec<f64>> for SampleArray {
    fn from(samples: Vec<f64>) -> Self {
        Self::from_mono(samples)
    }
}

impl From<&[f64]> for SampleArray {
    fn from(samples: &[f64]) -> Self {
        Self::from_mono(samples.to_vec())
    }
}
