//! Vetor de estado e aplicação de instruções
//!
//! Convenção de índices: o qubit `q` é o bit `q` do índice do
//! estado-base, então o rótulo binário (MSB à esquerda) lê os
//! registradores do topo da pilha para a base — tempo, canal,
//! amplitude.

use num_complex::Complex64;
use num_traits::Zero;

use qar_core::{CoreError, CoreResult, Instruction};

/// Estado quântico puro de `num_qubits` qubits
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Estado inicial |0...0>
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::zero(); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes na ordem do índice binário
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probabilidades de medição por estado-base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Aplica uma instrução ao estado
    ///
    /// Barreiras e medições são neutras aqui: a leitura acontece de uma
    /// vez só, sobre as probabilidades finais.
    pub fn apply(&mut self, instruction: &Instruction) -> CoreResult<()> {
        match instruction {
            Instruction::Hadamard { qubit } => {
                self.check_qubit(*qubit)?;
                let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
                self.for_each_pair(*qubit, &[], |low, high| {
                    (
                        (low + high) * inv_sqrt2,
                        (low - high) * inv_sqrt2,
                    )
                });
            }
            Instruction::PauliX { qubit } => {
                self.check_qubit(*qubit)?;
                self.for_each_pair(*qubit, &[], |low, high| (high, low));
            }
            Instruction::MultiControlledX { controls, target } => {
                self.check_qubit(*target)?;
                for &control in controls {
                    self.check_qubit(control)?;
                }
                self.for_each_pair(*target, controls, |low, high| (high, low));
            }
            Instruction::ControlledRy {
                theta,
                controls,
                target,
            } => {
                self.check_qubit(*target)?;
                for &control in controls {
                    self.check_qubit(control)?;
                }
                let (sin, cos) = (theta / 2.0).sin_cos();
                self.for_each_pair(*target, controls, |low, high| {
                    (low * cos - high * sin, low * sin + high * cos)
                });
            }
            Instruction::Initialize { amplitudes } => {
                if amplitudes.len() != self.amplitudes.len() {
                    return Err(CoreError::InvalidStateLength {
                        expected: self.amplitudes.len(),
                        got: amplitudes.len(),
                    });
                }
                self.amplitudes = amplitudes
                    .iter()
                    .map(|&a| Complex64::new(a, 0.0))
                    .collect();
            }
            Instruction::Barrier | Instruction::Measure { .. } => {}
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> CoreResult<()> {
        if qubit >= self.num_qubits {
            return Err(CoreError::QubitOutOfBounds {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Aplica uma transformação 2x2 a cada par (target=0, target=1)
    /// cujos bits de controle estão todos em 1
    fn for_each_pair<F>(&mut self, target: usize, controls: &[usize], transform: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let target_mask = 1usize << target;
        let control_mask: usize = controls.iter().map(|&c| 1usize << c).sum();
        for index in 0..self.amplitudes.len() {
            if index & target_mask != 0 {
                continue;
            }
            if index & control_mask != control_mask {
                continue;
            }
            let pair = index | target_mask;
            let (low, high) = transform(self.amplitudes[index], self.amplitudes[pair]);
            self.amplitudes[index] = low;
            self.amplitudes[pair] = high;
        }
    }
}
