//! QSM — Quantum State Modulation
//!
//! Cada amostra é quantizada como inteiro em complemento de dois e
//! gravada bit a bit no registrador de amplitude por portas X
//! multi-controladas. A leitura é nominal, não estatística: para cada
//! instante de tempo vale o estado de amplitude mais observado, e a
//! contagem em si é descartada.

use qar_core::{Counts, ExecutionResult, QuantumCircuit, QuantumRegister, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::indexing::{control_qubits, with_index_controls};
use crate::scheme::{DataShape, EncodeOptions, Scheme, SchemeName};
use crate::utils::convert::{de_quantize, quantize};
use crate::utils::data::{
    apply_index_padding, get_bit_depth, get_qubit_count, parse_signed, parse_unsigned,
    report_num_qubits,
};

/// Esquema de modulação de estado quântico (mono)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Qsm {
    /// Tamanho congelado do registrador de amplitude; `None` deriva a
    /// profundidade dos níveis presentes nos dados
    qubit_depth: Option<usize>,
}

impl Qsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_qubit_depth(qubit_depth: Option<usize>) -> Self {
        Self { qubit_depth }
    }

    /// Padding e quantização das amostras como inteiros com sinal
    pub fn prepare_data(
        &self,
        samples: &[f64],
        num_index_qubits: usize,
        qubit_depth: usize,
    ) -> Vec<i64> {
        quantize(&apply_index_padding(samples, num_index_qubits), qubit_depth)
    }

    /// Circuito com registrador de amplitude multi-qubit e registrador
    /// de tempo em superposição uniforme
    pub fn initialize_circuit(
        &self,
        num_index_qubits: usize,
        qubit_depth: usize,
    ) -> SchemeResult<QuantumCircuit> {
        let mut circuit = QuantumCircuit::new("qsm");
        circuit.add_register(QuantumRegister::new("amplitude", qubit_depth));
        let time = circuit.add_register(QuantumRegister::new("time", num_index_qubits));
        circuit.h_register(time)?;
        Ok(circuit)
    }

    /// Grava os bits do valor quantizado no registrador de amplitude,
    /// endereçados pelo índice
    ///
    /// O deslocamento aritmético do `i64` entrega os bits do
    /// complemento de dois também para valores negativos.
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

    /// Valor quantizado por instante de tempo: vence o estado de
    /// amplitude mais observado (empates resolvidos pelo menor valor)
    pub fn decode_components(
        &self,
        counts: &Counts,
        num_index_qubits: usize,
        qubit_depth: usize,
    ) -> Vec<i64> {
        let num_states = 1usize << num_index_qubits;
        let mut best: Vec<(u64, i64)> = vec![(0, 0); num_states];
        for (state, count) in counts.iter() {
            if state.len() != num_index_qubits + qubit_depth {
                continue;
            }
            let time = parse_unsigned(&state[..num_index_qubits]);
            if time >= num_states {
                continue;
            }
            let value = parse_signed(&state[num_index_qubits..]);
            let (top_count, top_value) = best[time];
            if count > top_count || (count == top_count && value < top_value) {
                best[time] = (count, value);
            }
        }
        best.into_iter().map(|(_, value)| value).collect()
    }

    /// Amostras a partir dos valores quantizados
    pub fn reconstruct_data(&self, values: &[i64], qubit_depth: usize) -> Vec<f64> {
        de_quantize(values, qubit_depth)
    }

    fn resolve_depth(&self, samples: &[f64]) -> usize {
        self.qubit_depth
            .unwrap_or_else(|| get_bit_depth(&[samples.to_vec()]))
    }
}

impl Scheme for Qsm {
    fn scheme_name(&self) -> SchemeName {
        SchemeName::Qsm
    }

    fn name(&self) -> &'static str {
        "Quantum State Modulation"
    }

    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)> {
        if data.is_empty() {
            return Err(SchemeError::EmptyData);
        }
        if !data.is_mono() {
            return Err(SchemeError::MultiChannelUnsupported("qsm"));
        }
        let num_samples = data.num_samples();
        let num_index_qubits = get_qubit_count(num_samples);
        let qubit_depth = self.resolve_depth(data.channel(0));
        if verbose {
            report_num_qubits(&[num_index_qubits, qubit_depth], &["time", "amplitude"]);
        }
        Ok((
            DataShape {
                num_channels: 1,
                num_samples,
            },
            vec![num_index_qubits, qubit_depth],
        ))
    }

    fn encode_with(
        &self,
        data: &SampleArray,
        options: EncodeOptions,
    ) -> SchemeResult<QuantumCircuit> {
        let (shape, registers) = self.calculate(data, options.verbose)?;
        let (num_index_qubits, qubit_depth) = (registers[0], registers[1]);

        let values = self.prepare_data(data.channel(0), num_index_qubits, qubit_depth);
        let mut circuit = self.initialize_circuit(num_index_qubits, qubit_depth)?;
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
        let registers = metadata.require_num_qubits()?;
        let num_index_qubits = registers.first().copied().unwrap_or(0);
        let qubit_depth = registers.last().copied().unwrap_or(1);

        let values = self.decode_components(result.get_counts(), num_index_qubits, qubit_depth);
        let samples = self.reconstruct_data(&values, qubit_depth);
        let array = SampleArray::from_mono(samples);
        if keep_padding {
            Ok(array)
        } else {
            Ok(array.truncate_samples(num_samples))
        }
    }
}
