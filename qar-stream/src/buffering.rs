//! Divisão em chunks, processamento e recombinação
//!
//! Sinais longos estouram o número de qubits simulável; o pipeline
//! corta o eixo do tempo em chunks de tamanho fixo, codifica, executa e
//! decodifica cada um isoladamente e concatena as reconstruções. O
//! último chunk pode ser mais curto: o padding interno de cada esquema
//! é desfeito na decodificação, então a emenda não carrega zeros.

use qar_core::{Executor, SampleArray};
use qar_schemes::{DecodeOptions, Scheme, SchemeName, SchemeOptions, load_scheme};
use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// Parâmetros do pipeline em chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Amostras por chunk (por canal)
    pub chunk_size: usize,
    /// Shots por chunk
    pub shots: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: 256,
            shots: 8000,
        }
    }
}

/// Corta o eixo das amostras em chunks de até `chunk_size` amostras,
/// preservando todos os canais
pub fn get_chunks(data: &SampleArray, chunk_size: usize) -> StreamResult<Vec<SampleArray>> {
    if chunk_size == 0 {
        return Err(StreamError::InvalidChunkSize(chunk_size));
    }
    let num_samples = data.num_samples();
    let mut chunks = Vec::with_capacity(num_samples.div_ceil(chunk_size));
    let mut start = 0;
    while start < num_samples {
        let end = (start + chunk_size).min(num_samples);
        let channels: Vec<Vec<f64>> = data.channels().map(|c| c[start..end].to_vec()).collect();
        chunks.push(SampleArray::from_channels(channels)?);
        start = end;
    }
    Ok(chunks)
}

/// Codifica, executa e decodifica um único chunk
pub fn process_chunk(
    scheme: &dyn Scheme,
    chunk: &SampleArray,
    executor: &dyn Executor,
    shots: u64,
) -> StreamResult<SampleArray> {
    let mut circuit = scheme.encode(chunk)?;
    let options = DecodeOptions {
        shots,
        keep_padding: false,
    };
    Ok(scheme.decode_with(&mut circuit, executor, options)?)
}

/// Processa uma sequência de chunks, na ordem
pub fn process_chunks(
    scheme: &dyn Scheme,
    chunks: &[SampleArray],
    executor: &dyn Executor,
    shots: u64,
) -> StreamResult<Vec<SampleArray>> {
    let mut processed = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        tracing::debug!(chunk = index + 1, total = chunks.len(), "processing chunk");
        processed.push(process_chunk(scheme, chunk, executor, shots)?);
    }
    Ok(processed)
}

/// Concatena as reconstruções no eixo das amostras
pub fn combine_chunks(chunks: &[SampleArray]) -> StreamResult<SampleArray> {
    Ok(SampleArray::concat_samples(chunks)?)
}

/// Pipeline completo: corta, processa chunk a chunk e recombina
pub fn stream_data(
    data: &SampleArray,
    name: SchemeName,
    executor: &dyn Executor,
    config: StreamConfig,
) -> StreamResult<SampleArray> {
    let scheme = load_scheme(name, &SchemeOptions::default());
    tracing::info!(
        scheme = %name,
        samples = data.num_samples(),
        channels = data.num_channels(),
        chunk_size = config.chunk_size,
        "streaming signal through scheme"
    );
    let chunks = get_chunks(data, config.chunk_size)?;
    let processed = process_chunks(scheme.as_ref(), &chunks, executor, config.shots)?;
    combine_chunks(&processed)
}
