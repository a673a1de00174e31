//! Preparação de dados: contagem de qubits, padding e entrelaçamento

use qar_core::SampleArray;

/// Número de qubits necessários para endereçar `extent` estados
/// (ceil(log2), com 0 para extensões triviais)
pub fn get_qubit_count(extent: usize) -> usize {
    if extent <= 1 {
        0
    } else {
        (usize::BITS - (extent - 1).leading_zeros()) as usize
    }
}

/// Profundidade de bits de um sinal, derivada do número de níveis
/// distintos presentes nos dados (mínimo 1)
pub fn get_bit_depth(channels: &[Vec<f64>]) -> usize {
    let mut levels: Vec<f64> = channels.iter().flatten().copied().collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup();
    get_qubit_count(levels.len()).max(1)
}

/// Zero-padding à direita de um vetor até `2^num_index_qubits` amostras
pub fn apply_index_padding(data: &[f64], num_index_qubits: usize) -> Vec<f64> {
    let target = 1usize << num_index_qubits;
    let mut padded = data.to_vec();
    if padded.len() < target {
        padded.resize(target, 0.0);
    }
    padded
}

/// Zero-padding à direita nos dois eixos: canais até
/// `2^num_channel_qubits` e amostras até `2^num_index_qubits`
pub fn apply_padding(
    data: &SampleArray,
    num_channel_qubits: usize,
    num_index_qubits: usize,
) -> Vec<Vec<f64>> {
    let target_channels = 1usize << num_channel_qubits;
    let mut channels: Vec<Vec<f64>> = data
        .channels()
        .map(|c| apply_index_padding(c, num_index_qubits))
        .collect();
    while channels.len() < target_channels {
        channels.push(vec![0.0; 1usize << num_index_qubits]);
    }
    channels
}

/// Entrelaça canais em sequência plana: posições consecutivas alternam
/// canais, de modo que o índice plano `i` carrega o canal nos bits
/// baixos (`i mod C`) e o tempo nos bits altos (`i / C`)
pub fn interleave_channels(channels: &[Vec<f64>]) -> Vec<f64> {
    let num_samples = channels.first().map(|c| c.len()).unwrap_or(0);
    let mut flat = Vec::with_capacity(channels.len() * num_samples);
    for t in 0..num_samples {
        for channel in channels {
            flat.push(channel[t]);
        }
    }
    flat
}

/// Desfaz o entrelaçamento: inverso exato de `interleave_channels`
pub fn restore_channels(flat: &[f64], num_channels: usize) -> Vec<Vec<f64>> {
    (0..num_channels)
        .map(|c| flat.iter().skip(c).step_by(num_channels).copied().collect())
        .collect()
}

/// Interpreta uma bitstring como inteiro sem sinal
pub fn parse_unsigned(bits: &str) -> usize {
    usize::from_str_radix(bits, 2).unwrap_or(0)
}

/// Interpreta uma bitstring como inteiro em complemento de dois
pub fn parse_signed(bits: &str) -> i64 {
    let value = i64::from_str_radix(bits, 2).unwrap_or(0);
    if bits.starts_with('1') {
        value - (1i64 << bits.len())
    } else {
        value
    }
}

/// Gera dados sintéticos determinísticos em [0, 1) para testes e demos
///
/// Áudio real tem milhares de amostras por segundo; sinais curtos
/// sintéticos são mais práticos para inspecionar circuitos.
pub fn simulate_data(num_samples: usize, num_channels: usize, seed: u64) -> SampleArray {
    // LCG simples para aleatoriedade determinística
    let a = 1664525u64;
    let c = 1013904223u64;
    let m = 2u64.pow(32);
    let mut state = seed;
    let mut next = move || {
        state = (a.wrapping_mul(state).wrapping_add(c)) % m;
        (state as f64) / (m as f64)
    };

    let channels: Vec<Vec<f64>> = (0..num_channels.max(1))
        .map(|_| (0..num_samples).map(|_| next()).collect())
        .collect();
    if channels.len() == 1 {
        SampleArray::from_mono(channels.into_iter().next().unwrap_or_default())
    } else {
        // canais gerados com o mesmo comprimento
        SampleArray::from_channels(channels).unwrap_or_default()
    }
}

/// Reporta a alocação de qubits por registrador
pub(crate) fn report_num_qubits(num_qubits: &[usize], labels: &[&str]) {
    tracing::debug!(
        "Number of qubits required: {}",
        num_qubits.iter().sum::<usize>()
    );
    for (qubits, label) in num_qubits.iter().zip(labels) {
        tracing::debug!("{qubits} for {label}");
    }
}
