//! Fachada de codificação/decodificação dirigida por nome de esquema
//!
//! Ponto de entrada para quem não quer instanciar esquemas à mão: a
//! codificação grava o nome do esquema nos metadados do circuito, e a
//! decodificação o lê de volta do resultado, de modo que o mesmo par de
//! funções serve às cinco representações.

use qar_core::{CircuitMetadata, Counts, ExecutionResult, Executor, QuantumCircuit, SampleArray};

use crate::error::SchemeResult;
use crate::scheme::{
    DecodeOptions, EncodeOptions, Scheme, SchemeName, SchemeOptions, load_scheme,
};

/// Codifica amostras com o esquema nomeado, nas opções padrão
pub fn encode(data: &SampleArray, name: SchemeName) -> SchemeResult<QuantumCircuit> {
    encode_with(
        data,
        name,
        &SchemeOptions::default(),
        EncodeOptions::default(),
    )
}

/// Codifica amostras com controle total das opções de construção e de
/// codificação
pub fn encode_with(
    data: &SampleArray,
    name: SchemeName,
    scheme_options: &SchemeOptions,
    encode_options: EncodeOptions,
) -> SchemeResult<QuantumCircuit> {
    load_scheme(name, scheme_options).encode_with(data, encode_options)
}

/// Reconstrói o esquema gravado nos metadados
pub fn scheme_from_metadata(metadata: &CircuitMetadata) -> SchemeResult<Box<dyn Scheme>> {
    let name: SchemeName = metadata.require_scheme()?.parse()?;
    Ok(load_scheme(name, &SchemeOptions::default()))
}

/// Mede, executa e decodifica um circuito, resolvendo o esquema pelos
/// metadados
pub fn decode(
    circuit: &mut QuantumCircuit,
    executor: &dyn Executor,
    options: DecodeOptions,
) -> SchemeResult<SampleArray> {
    let scheme = scheme_from_metadata(&circuit.metadata)?;
    scheme.decode_with(circuit, executor, options)
}

/// Decodifica um resultado de execução já obtido
pub fn decode_result(result: &ExecutionResult, keep_padding: bool) -> SchemeResult<SampleArray> {
    let scheme = scheme_from_metadata(result.metadata())?;
    scheme.decode_result(result, keep_padding)
}

/// Decodifica um histograma bruto, emparelhando-o com os metadados e os
/// shots da execução que o produziu
pub fn decode_counts(
    counts: Counts,
    metadata: &CircuitMetadata,
    shots: u64,
    keep_padding: bool,
) -> SchemeResult<SampleArray> {
    let result = ExecutionResult::new(counts, shots, metadata.clone());
    decode_result(&result, keep_padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemeError;

    #[test]
    fn test_encode_records_scheme_name() {
        let data = SampleArray::from_mono(vec![0.0, 0.5, -0.5]);
        for name in SchemeName::all() {
            let circuit = encode(&data, name).unwrap();
            assert_eq!(circuit.metadata.scheme.as_deref(), Some(name.as_str()));
        }
    }

    #[test]
    fn test_decode_rejects_unrecorded_scheme() {
        let result = ExecutionResult::new(Counts::new(), 100, CircuitMetadata::new());
        assert!(matches!(
            decode_result(&result, false),
            Err(SchemeError::Core(_))
        ));
    }

    #[test]
    fn test_decode_counts_resolves_qsm() {
        let data = SampleArray::from_mono(vec![0.0, -0.25, 0.5, 0.75, -0.75, -1.0, 0.25]);
        let circuit = encode(&data, SchemeName::Qsm).unwrap();
        let counts = Counts::from([
            ("101 100", 122),
            ("111 000", 125),
            ("011 011", 124),
            ("100 101", 124),
            ("010 010", 127),
            ("000 000", 123),
            ("110 001", 125),
            ("001 111", 130),
        ]);
        let restored = decode_counts(counts, &circuit.metadata, 1000, false).unwrap();
        assert_eq!(
            restored.channel(0),
            &[0.0, -0.25, 0.5, 0.75, -0.75, -1.0, 0.25]
        );
    }
}
