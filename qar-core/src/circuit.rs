//! Circuito quântico multi-registrador
//!
//! O circuito é uma coleção ordenada de registradores quânticos
//! (empilhados do menos significativo para o mais significativo:
//! value, channel, time) mais a sequência de instruções emitidas e os
//! metadados necessários para inverter a codificação.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::instruction::Instruction;
use crate::metadata::CircuitMetadata;
use crate::register::{ClassicalRegister, QuantumRegister};

/// Circuito quântico com registradores nomeados e metadados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumCircuit {
    name: String,
    qregs: Vec<QuantumRegister>,
    cregs: Vec<ClassicalRegister>,
    instructions: Vec<Instruction>,
    /// Metadados de decodificação (criados na codificação)
    pub metadata: CircuitMetadata,
}

impl QuantumCircuit {
    /// Cria circuito vazio
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qregs: Vec::new(),
            cregs: Vec::new(),
            instructions: Vec::new(),
            metadata: CircuitMetadata::new(),
        }
    }

    /// Nome do circuito (tipicamente o esquema que o construiu)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anexa um registrador quântico acima dos existentes e retorna
    /// seu índice na pilha
    pub fn add_register(&mut self, register: QuantumRegister) -> usize {
        self.qregs.push(register);
        self.qregs.len() - 1
    }

    /// Registradores quânticos, do menos para o mais significativo
    pub fn qregs(&self) -> &[QuantumRegister] {
        &self.qregs
    }

    /// Registradores clássicos
    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    /// Número total de qubits
    pub fn num_qubits(&self) -> usize {
        self.qregs.iter().map(|r| r.size).sum()
    }

    /// Número total de bits clássicos
    pub fn num_clbits(&self) -> usize {
        self.cregs.iter().map(|r| r.size).sum()
    }

    /// Índice global do primeiro qubit do registrador `index`
    pub fn register_offset(&self, index: usize) -> CoreResult<usize> {
        if index >= self.qregs.len() {
            return Err(CoreError::RegisterOutOfBounds(index, self.qregs.len()));
        }
        Ok(self.qregs[..index].iter().map(|r| r.size).sum())
    }

    /// Índices globais dos qubits do registrador `index`
    pub fn register_qubits(&self, index: usize) -> CoreResult<std::ops::Range<usize>> {
        let offset = self.register_offset(index)?;
        Ok(offset..offset + self.qregs[index].size)
    }

    /// Instruções emitidas, na ordem
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    // ───────────────────────────── Portas ─────────────────────────────

    /// Aplica Hadamard a um qubit
    pub fn h(&mut self, qubit: usize) {
        debug_assert!(qubit < self.num_qubits());
        self.instructions.push(Instruction::Hadamard { qubit });
    }

    /// Aplica Hadamard a todos os qubits de um registrador
    pub fn h_register(&mut self, index: usize) -> CoreResult<()> {
        for qubit in self.register_qubits(index)? {
            self.h(qubit);
        }
        Ok(())
    }

    /// Aplica Pauli-X a um qubit
    pub fn x(&mut self, qubit: usize) {
        debug_assert!(qubit < self.num_qubits());
        self.instructions.push(Instruction::PauliX { qubit });
    }

    /// Aplica X multi-controlado
    pub fn mcx(&mut self, controls: Vec<usize>, target: usize) {
        debug_assert!(target < self.num_qubits());
        self.instructions
            .push(Instruction::MultiControlledX { controls, target });
    }

    /// Aplica Ry multi-controlado
    pub fn cry(&mut self, theta: f64, controls: Vec<usize>, target: usize) {
        debug_assert!(target < self.num_qubits());
        self.instructions.push(Instruction::ControlledRy {
            theta,
            controls,
            target,
        });
    }

    /// Prepara o estado global do circuito com um vetor de amplitudes
    /// de norma 1 e comprimento 2^n
    pub fn initialize(&mut self, amplitudes: Vec<f64>) -> CoreResult<()> {
        let expected = 1usize << self.num_qubits();
        if amplitudes.len() != expected {
            return Err(CoreError::InvalidStateLength {
                expected,
                got: amplitudes.len(),
            });
        }
        self.instructions.push(Instruction::Initialize { amplitudes });
        Ok(())
    }

    /// Insere uma barreira
    pub fn barrier(&mut self) {
        self.instructions.push(Instruction::Barrier);
    }

    // ──────────────────────────── Medição ────────────────────────────

    /// Verifica se o circuito já possui registradores clássicos
    pub fn is_measured(&self) -> bool {
        !self.cregs.is_empty()
    }

    /// Mede todos os qubits: cria um registrador clássico por
    /// registrador quântico (mesma largura, mesma ordem) e mede cada
    /// qubit no bit clássico de mesmo índice
    pub fn measure_all(&mut self) {
        for qreg in &self.qregs {
            self.cregs.push(ClassicalRegister::new(
                ClassicalRegister::label_for(qreg),
                qreg.size,
            ));
        }
        for qubit in 0..self.num_qubits() {
            self.instructions.push(Instruction::Measure {
                qubit,
                clbit: qubit,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_circuit() -> QuantumCircuit {
        let mut circuit = QuantumCircuit::new("test");
        circuit.add_register(QuantumRegister::new("amplitude", 3));
        circuit.add_register(QuantumRegister::new("channel", 1));
        circuit.add_register(QuantumRegister::new("time", 2));
        circuit
    }

    #[test]
    fn test_register_stacking_offsets() {
        let circuit = stacked_circuit();
        assert_eq!(circuit.num_qubits(), 6);
        assert_eq!(circuit.register_qubits(0).unwrap(), 0..3);
        assert_eq!(circuit.register_qubits(1).unwrap(), 3..4);
        assert_eq!(circuit.register_qubits(2).unwrap(), 4..6);
    }

    #[test]
    fn test_register_out_of_bounds() {
        let circuit = stacked_circuit();
        assert!(matches!(
            circuit.register_offset(3),
            Err(CoreError::RegisterOutOfBounds(3, 3))
        ));
    }

    #[test]
    fn test_initialize_length_check() {
        let mut circuit = QuantumCircuit::new("test");
        circuit.add_register(QuantumRegister::new("time", 2));
        assert!(circuit.initialize(vec![0.5; 4]).is_ok());
        assert!(matches!(
            circuit.initialize(vec![0.5; 3]),
            Err(CoreError::InvalidStateLength { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn test_measure_all_mirrors_registers() {
        let mut circuit = stacked_circuit();
        assert!(!circuit.is_measured());
        circuit.measure_all();
        assert!(circuit.is_measured());
        assert_eq!(circuit.num_clbits(), 6);
        assert_eq!(circuit.cregs()[0].label, "ca");
        assert_eq!(circuit.cregs()[1].label, "cc");
        assert_eq!(circuit.cregs()[2].label, "ct");
    }
}
