//! Decodificação com o backend padrão
//!
//! Quando o chamador não injeta um backend próprio, o circuito roda no
//! simulador statevector deste crate. O esquema é resolvido pelos
//! metadados gravados na codificação, como na fachada de qar-schemes.

use qar_core::{QuantumCircuit, SampleArray};
use qar_schemes::{DecodeOptions, SchemeResult, api};

use crate::executor::StatevectorExecutor;

/// Decodifica um circuito no simulador statevector, com as opções
/// padrão (4000 shots, sem padding)
pub fn decode(circuit: &mut QuantumCircuit) -> SchemeResult<SampleArray> {
    decode_with(circuit, DecodeOptions::default())
}

/// Decodifica um circuito no simulador statevector com opções
/// explícitas
pub fn decode_with(
    circuit: &mut QuantumCircuit,
    options: DecodeOptions,
) -> SchemeResult<SampleArray> {
    api::decode(circuit, &StatevectorExecutor::new(), options)
}
