//! Interface comum dos esquemas, registro por nome e cache de instâncias

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use qar_core::{Executor, ExecutionResult, QuantumCircuit, SampleArray};

use crate::error::{SchemeError, SchemeResult};
use crate::mqsm::Mqsm;
use crate::msqpam::Msqpam;
use crate::qpam::Qpam;
use crate::qsm::Qsm;
use crate::sqpam::Sqpam;

/// Forma efetiva dos dados após o cálculo de registradores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataShape {
    pub num_channels: usize,
    pub num_samples: usize,
}

/// Opções de codificação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Adiciona medição ao circuito ao final da codificação
    pub measure: bool,
    /// Reporta a alocação de qubits via tracing
    pub verbose: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            measure: true,
            verbose: false,
        }
    }
}

/// Opções de decodificação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Número de repetições da medição
    pub shots: u64,
    /// Mantém o padding aplicado na codificação
    pub keep_padding: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            shots: 4000,
            keep_padding: false,
        }
    }
}

/// Um esquema é uma convenção de codificação/decodificação entre
/// amostras de áudio e circuitos quânticos
///
/// Os cinco esquemas compartilham os mesmos estágios nomeados
/// (`calculate`, `prepare_data`, conversão, construção de circuito,
/// medição, extração de componentes, reconstrução), todos invocáveis
/// isoladamente; `encode` e `decode` são as composições padrão.
pub trait Scheme {
    /// Identificador do esquema no registro
    fn scheme_name(&self) -> SchemeName;

    /// Nome completo da representação
    fn name(&self) -> &'static str;

    /// Deriva a forma efetiva dos dados e os tamanhos dos
    /// registradores, na ordem (time, [channel,] value)
    fn calculate(&self, data: &SampleArray, verbose: bool) -> SchemeResult<(DataShape, Vec<usize>)>;

    /// Codifica as amostras em um circuito com metadados de decodificação
    fn encode_with(&self, data: &SampleArray, options: EncodeOptions)
    -> SchemeResult<QuantumCircuit>;

    /// Decodifica um resultado de execução de volta em amostras
    fn decode_result(&self, result: &ExecutionResult, keep_padding: bool)
    -> SchemeResult<SampleArray>;

    /// Codificação com as opções padrão (circuito medido)
    fn encode(&self, data: &SampleArray) -> SchemeResult<QuantumCircuit> {
        self.encode_with(data, EncodeOptions::default())
    }

    /// Mede todos os registradores, se o circuito ainda não foi medido
    fn measure(&self, circuit: &mut QuantumCircuit) {
        if !circuit.is_measured() {
            circuit.barrier();
            circuit.measure_all();
        }
    }

    /// Mede, executa no backend fornecido e decodifica
    fn decode_with(
        &self,
        circuit: &mut QuantumCircuit,
        executor: &dyn Executor,
        options: DecodeOptions,
    ) -> SchemeResult<SampleArray> {
        self.measure(circuit);
        let result = executor.execute(circuit, options.shots)?;
        self.decode_result(&result, options.keep_padding)
    }

    /// Decodificação com as opções padrão (4000 shots, sem padding)
    fn decode(
        &self,
        circuit: &mut QuantumCircuit,
        executor: &dyn Executor,
    ) -> SchemeResult<SampleArray> {
        self.decode_with(circuit, executor, DecodeOptions::default())
    }
}

/// Conjunto fechado de esquemas disponíveis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    Qpam,
    Sqpam,
    Qsm,
    Msqpam,
    Mqsm,
}

impl SchemeName {
    /// Todos os esquemas, na ordem de apresentação
    pub fn all() -> [SchemeName; 5] {
        [
            SchemeName::Qpam,
            SchemeName::Sqpam,
            SchemeName::Qsm,
            SchemeName::Msqpam,
            SchemeName::Mqsm,
        ]
    }

    /// Identificador em minúsculas
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeName::Qpam => "qpam",
            SchemeName::Sqpam => "sqpam",
            SchemeName::Qsm => "qsm",
            SchemeName::Msqpam => "msqpam",
            SchemeName::Mqsm => "mqsm",
        }
    }

    /// Verifica se o esquema endereça múltiplos canais
    pub fn is_multi_channel(&self) -> bool {
        matches!(self, SchemeName::Msqpam | SchemeName::Mqsm)
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemeName {
    type Err = SchemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "qpam" => Ok(SchemeName::Qpam),
            "sqpam" => Ok(SchemeName::Sqpam),
            "qsm" => Ok(SchemeName::Qsm),
            "msqpam" => Ok(SchemeName::Msqpam),
            "mqsm" => Ok(SchemeName::Mqsm),
            _ => Err(SchemeError::UnknownScheme(name.to_string())),
        }
    }
}

/// Parâmetros de construção dos esquemas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeOptions {
    /// Congela o tamanho do registrador de amplitude (QSM/MQSM)
    pub qubit_depth: Option<usize>,
    /// Sobrescreve o número de canais (MSQPAM/MQSM)
    pub num_channels: Option<usize>,
}

/// Constrói a instância de um esquema a partir do registro explícito
///
/// Substitui a resolução por reflexão do nome: o conjunto de esquemas
/// é fechado e resolvido em tempo de compilação.
pub fn load_scheme(name: SchemeName, options: &SchemeOptions) -> Box<dyn Scheme> {
    match name {
        SchemeName::Qpam => Box::new(Qpam::new()),
        SchemeName::Sqpam => Box::new(Sqpam::new()),
        SchemeName::Qsm => Box::new(Qsm::with_qubit_depth(options.qubit_depth)),
        SchemeName::Msqpam => Box::new(Msqpam::with_num_channels(options.num_channels)),
        SchemeName::Mqsm => Box::new(Mqsm::with_options(options.qubit_depth, options.num_channels)),
    }
}

/// Memo de instâncias de esquema, chaveado pelos argumentos de
/// construção
///
/// Otimização de desempenho para pipelines que decodificam muitos
/// chunks com o mesmo esquema. Pertence ao chamador e NÃO é
/// thread-safe: deve viver em uma única thread.
#[derive(Default)]
pub struct SchemeCache {
    instances: HashMap<(SchemeName, SchemeOptions), Rc<dyn Scheme>>,
}

impl SchemeCache {
    /// Cria cache vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna a instância memoizada, construindo-a na primeira chamada
    pub fn load(&mut self, name: SchemeName, options: SchemeOptions) -> Rc<dyn Scheme> {
        Rc::clone(
            self.instances
                .entry((name, options))
                .or_insert_with(|| Rc::from(load_scheme(name, &options))),
        )
    }

    /// Número de instâncias memoizadas
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Verifica se o cache está vazio
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_name_roundtrip() {
        for name in SchemeName::all() {
            assert_eq!(name.as_str().parse::<SchemeName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_scheme_echoes_name() {
        let err = "qqsm".parse::<SchemeName>().unwrap_err();
        assert!(matches!(err, SchemeError::UnknownScheme(ref name) if name == "qqsm"));
    }

    #[test]
    fn test_load_scheme_registry() {
        for name in SchemeName::all() {
            let scheme = load_scheme(name, &SchemeOptions::default());
            assert_eq!(scheme.scheme_name(), name);
        }
    }

    #[test]
    fn test_scheme_name_serde_is_lowercase() {
        let json = serde_json::to_string(&SchemeName::Msqpam).unwrap();
        assert_eq!(json, "\"msqpam\"");
        let parsed: SchemeName = serde_json::from_str("\"qsm\"").unwrap();
        assert_eq!(parsed, SchemeName::Qsm);
    }

    #[test]
    fn test_options_serde_roundtrip() {
        let options = DecodeOptions {
            shots: 12_000,
            keep_padding: true,
        };
        let json = serde_json::to_string(&options).unwrap();
        let parsed: DecodeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_cache_memoizes_by_options() {
        let mut cache = SchemeCache::new();
        let a = cache.load(SchemeName::Qsm, SchemeOptions::default());
        let b = cache.load(SchemeName::Qsm, SchemeOptions::default());
        assert!(Rc::ptr_eq(&a, &b));

        let deeper = SchemeOptions {
            qubit_depth: Some(8),
            ..Default::default()
        };
        let c = cache.load(SchemeName::Qsm, deeper);
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }
}
