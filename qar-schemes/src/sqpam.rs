//! SQPAM — Single-Qubit Probability Amplitude Modulation
//!
//! Cada amostra vira um ângulo de rotação gravado em um único qubit de
//! amplitude: `theta = arcsin(sqrt((x + 1) / 2))`. O registrador de
//! tempo em superposição uniforme endereça as amostras, e uma rotação
//! Ry controlada de `2 * theta` escreve cada valor na posição certa.
//! A decodificação compara as ocorrências de seno e cosseno por
//! instante de tempo.

use qar_core::{Counts, ExecutionResult, QuantumCircuit, QuantumRegister, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::indexing::{control_qubits, with_index_controls};
use crate::scheme::{DataShape, EncodeOptions, Scheme, SchemeName};
use crate::utils::convert::{convert_from_angles, convert_to_angles};
use crate::utils::data::{
    apply_index_padding, get_qubit_count, parse_unsigned, report_num_qubits,
};

/// Esquema de modulação por rotação em qubit único (mono)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqpam;

impl Sqpam {
    pub fn new() -> Self {
        Self
    }

    /// Padding e conversão das amostras em ângulos de rotação
    pub fn prepare_data(
        &self,
        samples: &[f64],
        num_index_qubits: usize,
    ) -> SchemeResult<Vec<f64>> {
        convert_to_angles(&apply_index_padding(samples, num_index_qubits))
    }

    /// Circuito com registrador de amplitude (1 qubit) e de tempo,
    /// com o tempo em superposição uniforme
    pub fn initialize_circuit(&self, num_index_qubits: usize) -> SchemeResult<QuantumCircuit> {
        let mut circuit = QuantumCircuit::new("sqpam");
        circuit.add_register(QuantumRegister::new("amplitude", 1));
        let time = circuit.add_register(QuantumRegister::new("time", num_index_qubits));
        circuit.h_register(time)?;
        Ok(circuit)
    }

    /// Grava um ângulo no qubit de amplitude, endereçado pelo índice
    pub fn value_setting(&self, circuit: &mut QuantumCircuit, index: usize, angle: f64) {
        let controls = control_qubits(circuit);
        with_index_controls(circuit, index, |qc| {
            qc.cry(2.0 * angle, controls, 0);
        });
    }

    /// Acumuladores de cosseno e seno por instante de tempo
    ///
    /// O rótulo lê tempo|amplitude da esquerda para a direita: o último
    /// bit diz se a contagem alimenta o seno (1) ou o cosseno (0).
    pub fn decode_components(
        &self,
        counts: &Counts,
        num_index_qubits: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let num_states = 1usize << num_index_qubits;
        let mut cosine = vec![0.0; num_states];
        let mut sine = vec![0.0; num_states];
        for (state, count) in counts.iter() {
            if state.len() != num_index_qubits + 1 {
                continue;
            }
            let time = parse_unsigned(&state[..num_index_qubits]);
            if time >= num_states {
                continue;
            }
            if state.ends_with('1') {
                sine[time] += count as f64;
            } else {
                cosine[time] += count as f64;
            }
        }
        (cosine, sine)
    }

    /// Amostras a partir dos acumuladores de cosseno e seno
    pub fn reconstruct_data(&self, cosine: &[f64], sine: &[f64]) -> Vec<f64> {
        convert_from_angles(cosine, sine)
    }
}

impl Scheme for Sqpam {
    fn scheme_name(&self) -> SchemeName {
        SchemeName::Sqpam
    }

    fn name(&self) -> &'static str {
        "Single-Qubit Probability Amplitude Modulation"
    }

    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)> {
        if data.is_empty() {
            return Err(SchemeError::EmptyData);
        }
        if !data.is_mono() {
            return Err(SchemeError::MultiChannelUnsupported("sqpam"));
        }
        let num_samples = data.num_samples();
        let num_index_qubits = get_qubit_count(num_samples);
        if verbose {
            report_num_qubits(&[num_index_qubits, 1], &["time", "amplitude"]);
        }
        Ok((
            DataShape {
                num_channels: 1,
                num_samples,
            },
            vec![num_index_qubits, 1],
        ))
    }

    fn encode_with(
        &self,
        data: &SampleArray,
        options: EncodeOptions,
    ) -> SchemeResult<QuantumCircuit> {
        let (shape, registers) = self.calculate(data, options.verbose)?;
        let num_index_qubits = registers[0];

        let angles = self.prepare_data(data.channel(0), num_index_qubits)?;
        let mut circuit = self.initialize_circuit(num_index_qubits)?;
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
        let num_index_qubits = metadata.require_num_qubits()?.first().copied().unwrap_or(0);

        let (cosine, sine) = self.decode_components(result.get_counts(), num_index_qubits);
        let samples = self.reconstruct_data(&cosine, &sine);
        let array = SampleArray::from_mono(samples);
        if keep_padding {
            Ok(array)
        } else {
            Ok(array.truncate_samples(num_samples))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qar_core::Instruction;

    const FIXTURE: [f64; 7] = [0.0, -0.25, 0.5, 0.75, -0.75, -1.0, 0.25];

    #[test]
    fn test_calculate_register_sizes() {
        let data = SampleArray::from_mono(FIXTURE.to_vec());
        let (shape, registers) = Sqpam::new().calculate(&data, false).unwrap();
        assert_eq!(shape.num_samples, 7);
        assert_eq!(registers, vec![3, 1]);
    }

    #[test]
    fn test_encode_emits_one_rotation_per_state() {
        let data = SampleArray::from_mono(FIXTURE.to_vec());
        let circuit = Sqpam::new().encode(&data).unwrap();
        assert_eq!(circuit.num_qubits(), 4);

        let rotations: Vec<&Instruction> = circuit
            .instructions()
            .iter()
            .filter(|i| matches!(i, Instruction::ControlledRy { .. }))
            .collect();
        // 8 posições endereçadas, incluindo o padding
        assert_eq!(rotations.len(), 8);

        // ângulo gravado é o dobro do ângulo da amostra
        let angles = convert_to_angles(&apply_index_padding(&FIXTURE, 3)).unwrap();
        if let Instruction::ControlledRy { theta, controls, target } = rotations[0] {
            assert!((theta - 2.0 * angles[0]).abs() < 1e-12);
            assert_eq!(controls, &vec![1, 2, 3]);
            assert_eq!(*target, 0);
        }
    }

    #[test]
    fn test_decode_components_split_by_amplitude_bit() {
        let counts = Counts::from([("000 0", 30), ("000 1", 70), ("011 1", 50)]);
        let (cosine, sine) = Sqpam::new().decode_components(&counts, 3);
        assert_eq!(cosine[0], 30.0);
        assert_eq!(sine[0], 70.0);
        assert_eq!(sine[3], 50.0);
        assert_eq!(cosine[3], 0.0);
    }

    #[test]
    fn test_decode_result_restores_samples() {
        let scheme = Sqpam::new();
        let data = SampleArray::from_mono(FIXTURE.to_vec());
        let circuit = scheme.encode(&data).unwrap();

        // contagens ideais: cada instante recebe shots/8, divididos
        // entre seno e cosseno pelas probabilidades exatas
        let shots_per_state = 125_000u64;
        let angles = convert_to_angles(&apply_index_padding(&FIXTURE, 3)).unwrap();
        let mut counts = Counts::new();
        for (i, &theta) in angles.iter().enumerate() {
            let sine = (theta.sin().powi(2) * shots_per_state as f64).round() as u64;
            counts.insert(&format!("{i:03b}1"), sine);
            counts.insert(&format!("{i:03b}0"), shots_per_state - sine);
        }
        let result =
            ExecutionResult::new(counts, shots_per_state * 8, circuit.metadata.clone());

        let restored = scheme.decode_result(&result, false).unwrap();
        assert_eq!(restored.num_samples(), 7);
        for (&x, &r) in FIXTURE.iter().zip(restored.channel(0)) {
            assert!((x - r).abs() < 1e-4, "{x} vs {r}");
        }
    }
}
