//! Histograma de resultados de medição
//!
//! Mapeia rótulos de estados-base (bitstrings de largura fixa) para o
//! número de ocorrências observadas ao longo dos shots. Estados não
//! observados simplesmente não aparecem no mapa: a leitura de uma
//! chave ausente vale zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Contagens de medição indexadas por rótulo de estado-base
///
/// Rótulos podem chegar com espaços ASCII separando grupos de
/// registradores (ex.: `"101 100"`); os espaços são removidos na
/// inserção, de modo que o mapa interno é sempre canônico.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counts {
    map: HashMap<String, u64>,
}

impl Counts {
    /// Cria histograma vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Rótulo canônico: remove espaços entre grupos de registradores
    fn canonical(state: &str) -> String {
        state.chars().filter(|c| !c.is_ascii_whitespace()).collect()
    }

    /// Acumula `count` ocorrências do estado
    pub fn insert(&mut self, state: &str, count: u64) {
        *self.map.entry(Self::canonical(state)).or_insert(0) += count;
    }

    /// Ocorrências do estado (zero se nunca observado)
    pub fn get(&self, state: &str) -> u64 {
        self.map.get(&Self::canonical(state)).copied().unwrap_or(0)
    }

    /// Número de estados distintos observados
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Verifica se nada foi observado
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Soma de todas as ocorrências
    pub fn total(&self) -> u64 {
        self.map.values().sum()
    }

    /// Largura (em bits) dos rótulos observados
    pub fn key_width(&self) -> Option<usize> {
        self.map.keys().next().map(|k| k.len())
    }

    /// Itera sobre pares (estado, contagem)
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Completa o histograma com todos os estados-base de `num_qubits`
    /// qubits, inserindo zero para cada estado nunca observado
    pub fn pad_counts(&self, num_qubits: usize) -> Counts {
        let mut padded = self.clone();
        for index in 0..(1usize << num_qubits) {
            padded
                .map
                .entry(format!("{index:0num_qubits$b}"))
                .or_insert(0);
        }
        padded
    }

    /// Preenche as contagens para todos os estados-base, na ordem
    /// crescente do índice binário, com zero para os não observados
    ///
    /// Contraparte densa de `pad_counts`: o vetor resultante tem
    /// comprimento `2^num_qubits` e é indexável pelo valor do rótulo.
    pub fn to_dense(&self, num_qubits: usize) -> Vec<u64> {
        let num_states = 1usize << num_qubits;
        let mut dense = vec![0u64; num_states];
        for (state, count) in self.iter() {
            if let Ok(index) = usize::from_str_radix(state, 2) {
                if index < num_states {
                    dense[index] += count;
                }
            }
        }
        dense
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (state, count) in iter {
            counts.insert(&state, count);
        }
        counts
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Counts {
    fn from(pairs: [(&str, u64); N]) -> Self {
        pairs
            .into_iter()
            .map(|(state, count)| (state.to_string(), count))
            .collect()
    }
}
