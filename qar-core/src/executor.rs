//! Contrato de execução de circuitos
//!
//! A execução é um colaborador externo ao núcleo: um backend opaco que
//! recebe o circuito medido e o número de shots e devolve contagens
//! mais os metadados ecoados. Não há semântica de cancelamento nem de
//! timeout — a chamada bloqueia até o resultado.

use crate::circuit::QuantumCircuit;
use crate::error::CoreResult;
use crate::result::ExecutionResult;

/// Backend capaz de executar e medir circuitos QAR
pub trait Executor {
    /// Executa o circuito `shots` vezes e retorna o histograma de
    /// medições junto aos metadados do circuito
    fn execute(&self, circuit: &QuantumCircuit, shots: u64) -> CoreResult<ExecutionResult>;
}
