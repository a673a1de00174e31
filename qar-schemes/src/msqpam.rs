//! MSQPAM — Multi-channel Single-Qubit Probability Amplitude Modulation
//!
//! Generalização multicanal do SQPAM: um registrador de canal entra na
//! pilha entre a amplitude e o tempo, e os canais são entrelaçados em
//! uma sequência plana cujo índice carrega o canal nos bits baixos e o
//! tempo nos bits altos. O rótulo medido lê tempo|canal|amplitude da
//! esquerda para a direita.

use qar_core::{Counts, ExecutionResult, QuantumCircuit, QuantumRegister, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::indexing::{control_qubits, with_index_controls};
use crate::scheme::{DataShape, EncodeOptions, Scheme, SchemeName};
use crate::utils::convert::{convert_from_angles, convert_to_angles};
use crate::utils::data::{
    apply_padding, get_qubit_count, interleave_channels, parse_unsigned, report_num_qubits,
};

/// Esquema de modulação por rotação em qubit único, multicanal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Msqpam {
    /// Número de canais congelado; `None` usa os canais presentes
    num_channels: Option<usize>,
}

impl Msqpam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_channels(num_channels: Option<usize>) -> Self {
        Self { num_channels }
    }

    /// Padding nos dois eixos, entrelaçamento e conversão em ângulos
    pub fn prepare_data(
        &self,
        data: &SampleArray,
        num_channel_qubits: usize,
        num_index_qubits: usize,
    ) -> SchemeResult<Vec<f64>> {
        let channels = apply_padding(data, num_channel_qubits, num_index_qubits);
        convert_to_angles(&interleave_channels(&channels))
    }

    /// Circuito com registradores de amplitude (1 qubit), canal e
    /// tempo, com canal e tempo em superposição uniforme
    pub fn initialize_circuit(
        &self,
        num_index_qubits: usize,
        num_channel_qubits: usize,
    ) -> SchemeResult<QuantumCircuit> {
        let mut circuit = QuantumCircuit::new("msqpam");
        circuit.add_register(QuantumRegister::new("amplitude", 1));
        let channel = circuit.add_register(QuantumRegister::new("channel", num_channel_qubits));
        let time = circuit.add_register(QuantumRegister::new("time", num_index_qubits));
        circuit.h_register(channel)?;
        circuit.h_register(time)?;
        Ok(circuit)
    }

    /// Grava um ângulo no qubit de amplitude, endereçado pelo índice
    /// plano (canal nos bits baixos, tempo nos altos)
    pub fn value_setting(&self, circuit: &mut QuantumCircuit, index: usize, angle: f64) {
        let controls = control_qubits(circuit);
        with_index_controls(circuit, index, |qc| {
            qc.cry(2.0 * angle, controls, 0);
        });
    }

    /// Acumuladores de cosseno e seno por canal e instante de tempo
    pub fn decode_components(
        &self,
        counts: &Counts,
        num_index_qubits: usize,
        num_channel_qubits: usize,
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let num_states = 1usize << num_index_qubits;
        let num_channels = 1usize << num_channel_qubits;
        let mut cosine = vec![vec![0.0; num_states]; num_channels];
        let mut sine = vec![vec![0.0; num_states]; num_channels];
        for (state, count) in counts.iter() {
            if state.len() != num_index_qubits + num_channel_qubits + 1 {
                continue;
            }
            let time = parse_unsigned(&state[..num_index_qubits]);
            let channel = parse_unsigned(
                &state[num_index_qubits..num_index_qubits + num_channel_qubits],
            );
            if time >= num_states || channel >= num_channels {
                continue;
            }
            if state.ends_with('1') {
                sine[channel][time] += count as f64;
            } else {
                cosine[channel][time] += count as f64;
            }
        }
        (cosine, sine)
    }

    /// Amostras por canal a partir dos acumuladores
    pub fn reconstruct_data(&self, cosine: &[Vec<f64>], sine: &[Vec<f64>]) -> Vec<Vec<f64>> {
        cosine
            .iter()
            .zip(sine)
            .map(|(cos, sin)| convert_from_angles(cos, sin))
            .collect()
    }
}

impl Scheme for Msqpam {
    fn scheme_name(&self) -> SchemeName {
        SchemeName::Msqpam
    }

    fn name(&self) -> &'static str {
        "Multi-channel Single-Qubit Probability Amplitude Modulation"
    }

    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)> {
        if data.is_empty() {
            return Err(SchemeError::EmptyData);
        }
        let num_channels = self.num_channels.unwrap_or(data.num_channels());
        let num_samples = data.num_samples();
        // pelo menos 1 qubit de canal, mesmo para entrada mono
        let num_channel_qubits = get_qubit_count(num_channels.max(2));
        let num_index_qubits = get_qubit_count(num_samples);
        if verbose {
            report_num_qubits(
                &[num_index_qubits, num_channel_qubits, 1],
                &["time", "channel", "amplitude"],
            );
        }
        Ok((
            DataShape {
                num_channels,
                num_samples,
            },
            vec![num_index_qubits, num_channel_qubits, 1],
        ))
    }

    fn encode_with(
        &self,
        data: &SampleArray,
        options: EncodeOptions,
    ) -> SchemeResult<QuantumCircuit> {
        let (shape, registers) = self.calculate(data, options.verbose)?;
        let (num_index_qubits, num_channel_qubits) = (registers[0], registers[1]);

        let trimmed;
        let source = if shape.num_channels < data.num_channels() {
            trimmed = data.truncate_channels(shape.num_channels);
            &trimmed
        } else {
            data
        };
        let angles = self.prepare_data(source, num_channel_qubits, num_index_qubits)?;
        let mut circuit = self.initialize_circuit(num_index_qubits, num_channel_qubits)?;
        for (index, &angle) in angles.iter().enumerate() {
            self.value_setting(&mut circuit, index, angle);
        }

        circuit.metadata.scheme = Some(self.scheme_name().to_string());
        circuit.metadata.num_samples = Some(shape.num_samples);
        circuit.metadata.num_channels = Some(shape.num_channels);
        circuit.metadata.num_qubits = Some(registers);

        if options.measure {
            self.measure(&mut circuit);
        }
        Ok(circuit)
    }

    fn decode_result(
        &self,
        result: &ExecutionResult,
        keep_padding: bool,
    ) -> SchemeResult<SampleArray> {
        let metadata = result.metadata();
        let num_samples = metadata.require_num_samples()?;
        let num_channels = metadata.require_num_channels()?;
        let registers = metadata.require_num_qubits()?;
        let num_index_qubits = registers.first().copied().unwrap_or(0);
        let num_channel_qubits = registers.get(1).copied().unwrap_or(0);

        let (cosine, sine) =
            self.decode_components(result.get_counts(), num_index_qubits, num_channel_qubits);
        let channels = self.reconstruct_data(&cosine, &sine);
        let array = SampleArray::from_channels(channels)?;
        if keep_padding {
            Ok(array)
        } else {
            Ok(array
                .truncate_channels(num_channels)
                .truncate_samples(num_samples))
        }
    }
}
