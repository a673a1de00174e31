//! QPAM — Quantum Probability Amplitude Modulation
//!
//! As amostras viram as amplitudes de probabilidade do estado global:
//! um único registrador de tempo com `t` qubits representa `2^t`
//! amostras, e cada amostra é recuperada da frequência relativa do
//! estado-base correspondente. O fator de norma viaja nos metadados,
//! fora do estado quântico.

use qar_core::{Counts, ExecutionResult, QuantumCircuit, QuantumRegister, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::scheme::{DataShape, EncodeOptions, Scheme, SchemeName};
use crate::utils::convert::{
    convert_from_probability_amplitudes, convert_to_probability_amplitudes,
};
use crate::utils::data::{apply_index_padding, get_qubit_count, report_num_qubits};

/// Esquema de modulação por amplitude de probabilidade (mono)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Qpam;

impl Qpam {
    pub fn new() -> Self {
        Self
    }

    /// Zero-padding das amostras até a próxima potência de dois
    pub fn prepare_data(&self, samples: &[f64], num_index_qubits: usize) -> Vec<f64> {
        apply_index_padding(samples, num_index_qubits)
    }

    /// Converte amostras preparadas em (norma, amplitudes unitárias)
    pub fn convert(&self, samples: &[f64]) -> (f64, Vec<f64>) {
        convert_to_probability_amplitudes(samples)
    }

    /// Circuito com um único registrador de tempo
    ///
    /// Sem Hadamard inicial: a preparação de estado define todas as
    /// amplitudes de uma vez.
    pub fn initialize_circuit(&self, num_index_qubits: usize) -> QuantumCircuit {
        let mut circuit = QuantumCircuit::new("qpam");
        circuit.add_register(QuantumRegister::new("time", num_index_qubits));
        circuit
    }

    /// Prepara o estado global com o vetor de amplitudes
    pub fn value_setting(
        &self,
        circuit: &mut QuantumCircuit,
        amplitudes: Vec<f64>,
    ) -> SchemeResult<()> {
        circuit.initialize(amplitudes)?;
        Ok(())
    }

    /// Contagens densas por estado-base, na ordem do índice de tempo
    pub fn decode_components(&self, counts: &Counts, num_index_qubits: usize) -> Vec<u64> {
        counts.to_dense(num_index_qubits)
    }

    /// Amostras a partir das contagens densas, da norma e dos shots
    pub fn reconstruct_data(&self, components: &[u64], norm: f64, shots: u64) -> Vec<f64> {
        convert_from_probability_amplitudes(components, norm, shots)
    }
}

impl Scheme for Qpam {
    fn scheme_name(&self) -> SchemeName {
        SchemeName::Qpam
    }

    fn name(&self) -> &'static str {
        "Quantum Probability Amplitude Modulation"
    }

    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)> {
        if data.is_empty() {
            return Err(SchemeError::EmptyData);
        }
        if !data.is_mono() {
            return Err(SchemeError::MultiChannelUnsupported("qpam"));
        }
        let num_samples = data.num_samples();
        let num_index_qubits = get_qubit_count(num_samples);
        if verbose {
            report_num_qubits(&[num_index_qubits], &["time"]);
        }
        Ok((
            DataShape {
                num_channels: 1,
                num_samples,
            },
            vec![num_index_qubits, 0],
        ))
    }

    fn encode_with(
        &self,
        data: &SampleArray,
        options: EncodeOptions,
    ) -> SchemeResult<QuantumCircuit> {
        let (shape, registers) = self.calculate(data, options.verbose)?;
        let num_index_qubits = registers[0];

        let padded = self.prepare_data(data.channel(0), num_index_qubits);
        let (norm, amplitudes) = self.convert(&padded);

        let mut circuit = self.initialize_circuit(num_index_qubits);
        self.value_setting(&mut circuit, amplitudes)?;

        circuit.metadata.scheme = Some(self.scheme_name().to_string());
        circuit.metadata.num_samples = Some(shape.num_samples);
        circuit.metadata.num_channels = Some(shape.num_channels);
        circuit.metadata.num_qubits = Some(registers);
        circuit.metadata.norm_factor = Some(norm);

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
        let norm = metadata.require_norm_factor()?;
        let num_samples = metadata.require_num_samples()?;
        let num_index_qubits = metadata.require_num_qubits()?.first().copied().unwrap_or(0);

        let components = self.decode_components(result.get_counts(), num_index_qubits);
        let samples = self.reconstruct_data(&components, norm, result.shots());
        let array = SampleArray::from_mono(samples);
        if keep_padding {
            Ok(array)
        } else {
            Ok(array.truncate_samples(num_samples))
        }
    }
}
