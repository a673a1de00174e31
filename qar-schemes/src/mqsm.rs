//! MQSM — Multi-channel Quantum State Modulation
//!
//! Generalização multicanal do QSM: registrador de canal entre a
//! amplitude e o tempo, canais entrelaçados em sequência plana (canal
//! nos bits baixos do índice) e leitura nominal por par canal/tempo. A
//! profundidade de quantização é única para todos os canais.

use qar_core::{Counts, ExecutionResult, QuantumCircuit, QuantumRegister, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::indexing::{control_qubits, with_index_controls};
use crate::scheme::{DataShape, EncodeOptions, Scheme, SchemeName};
use crate::utils::convert::{de_quantize, quantize};
use crate::utils::data::{
    apply_padding, get_bit_depth, get_qubit_count, interleave_channels, parse_signed,
    parse_unsigned, report_num_qubits,
};

/// Esquema de modulação de estado quântico, multicanal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mqsm {
    /// Tamanho congelado do registrador de amplitude; `None` deriva a
    /// profundidade dos níveis presentes em todos os canais
    qubit_depth: Option<usize>,
    /// Número de canais congelado; `None` usa os canais presentes
    num_channels: Option<usize>,
}

impl Mqsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(qubit_depth: Option<usize>, num_channels: Option<usize>) -> Self {
        Self {
            qubit_depth,
            num_channels,
        }
    }

    /// Padding nos dois eixos, entrelaçamento e quantização
    pub fn prepare_data(
        &self,
        data: &SampleArray,
        num_channel_qubits: usize,
        num_index_qubits: usize,
        qubit_depth: usize,
    ) -> Vec<i64> {
        let channels = apply_padding(data, num_channel_qubits, num_index_qubits);
        quantize(&interleave_channels(&channels), qubit_depth)
    }

    /// Circuito com registradores de amplitude, canal e tempo, com
    /// canal e tempo em superposição uniforme
    pub fn initialize_circuit(
        &self,
        num_index_qubits: usize,
        num_channel_qubits: usize,
        qubit_depth: usize,
    ) -> SchemeResult<QuantumCircuit> {
        let mut circuit = QuantumCircuit::new("mqsm");
        circuit.add_register(QuantumRegister::new("amplitude", qubit_depth));
        let channel = circuit.add_register(QuantumRegister::new("channel", num_channel_qubits));
        let time = circuit.add_register(QuantumRegister::new("time", num_index_qubits));
        circuit.h_register(channel)?;
        circuit.h_register(time)?;
        Ok(circuit)
    }

    /// Grava os bits do valor quantizado, endereçados pelo índice plano
    pub fn value_setting(
        &self,
        circuit: &mut QuantumCircuit,
        index: usize,
        value: i64,
        qubit_depth: usize,
    ) {
        let controls = control_qubits(circuit);
        with_index_controls(circuit, index, |qc| {
            for bit in 0..qubit_depth {
                if (value >> bit) & 1 == 1 {
                    qc.mcx(controls.clone(), bit);
                }
            }
        });
    }

    /// Valor quantizado por canal e instante: vence o estado de
    /// amplitude mais observado (empates resolvidos pelo menor valor)
    pub fn decode_components(
        &self,
        counts: &Counts,
        num_index_qubits: usize,
        num_channel_qubits: usize,
        qubit_depth: usize,
    ) -> Vec<Vec<i64>> {
        let num_states = 1usize << num_index_qubits;
        let num_channels = 1usize << num_channel_qubits;
        let mut best: Vec<Vec<(u64, i64)>> = vec![vec![(0, 0); num_states]; num_channels];
        for (state, count) in counts.iter() {
            if state.len() != num_index_qubits + num_channel_qubits + qubit_depth {
                continue;
            }
            let time = parse_unsigned(&state[..num_index_qubits]);
            let channel = parse_unsigned(
                &state[num_index_qubits..num_index_qubits + num_channel_qubits],
            );
            if time >= num_states || channel >= num_channels {
                continue;
            }
            let value = parse_signed(&state[num_index_qubits + num_channel_qubits..]);
            let (top_count, top_value) = best[channel][time];
            if count > top_count || (count == top_count && value < top_value) {
                best[channel][time] = (count, value);
            }
        }
        best.into_iter()
            .map(|row| row.into_iter().map(|(_, value)| value).collect())
            .collect()
    }

    /// Amostras por canal a partir dos valores quantizados
    pub fn reconstruct_data(&self, values: &[Vec<i64>], qubit_depth: usize) -> Vec<Vec<f64>> {
        values
            .iter()
            .map(|channel| de_quantize(channel, qubit_depth))
            .collect()
    }
}

impl Scheme for Mqsm {
    fn scheme_name(&self) -> SchemeName {
        SchemeName::Mqsm
    }

    fn name(&self) -> &'static str {
        "Multi-channel Quantum State Modulation"
    }

    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)> {
        if data.is_empty() {
            return Err(SchemeError::EmptyData);
        }
        let num_channels = self.num_channels.unwrap_or(data.num_channels());
        let num_samples = data.num_samples();
        let num_channel_qubits = get_qubit_count(num_channels.max(2));
        let num_index_qubits = get_qubit_count(num_samples);
        let qubit_depth = self.qubit_depth.unwrap_or_else(|| {
            get_bit_depth(&data.channels().map(<[f64]>::to_vec).collect::<Vec<_>>())
        });
        if verbose {
            report_num_qubits(
                &[num_index_qubits, num_channel_qubits, qubit_depth],
                &["time", "channel", "amplitude"],
            );
        }
        Ok((
            DataShape {
                num_channels,
                num_samples,
            },
            vec![num_index_qubits, num_channel_qubits, qubit_depth],
        ))
    }

    fn encode_with(
        &self,
        data: &SampleArray,
        options: EncodeOptions,
    ) -> SchemeResult<QuantumCircuit> {
        let (shape, registers) = self.calculate(data, options.verbose)?;
        let (num_index_qubits, num_channel_qubits, qubit_depth) =
            (registers[0], registers[1], registers[2]);

        let trimmed;
        let source = if shape.num_channels < data.num_channels() {
            trimmed = data.truncate_channels(shape.num_channels);
            &trimmed
        } else {
            data
        };
        let values = self.prepare_data(source, num_channel_qubits, num_index_qubits, qubit_depth);
        let mut circuit =
            self.initialize_circuit(num_index_qubits, num_channel_qubits, qubit_depth)?;
        for (index, &value) in values.iter().enumerate() {
            self.value_setting(&mut circuit, index, value, qubit_depth);
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
        let qubit_depth = registers.last().copied().unwrap_or(1);

        let values = self.decode_components(
            result.get_counts(),
            num_index_qubits,
            num_channel_qubits,
            qubit_depth,
        );
        let channels = self.reconstruct_data(&values, qubit_depth);
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
