//! Conversões de valores e suas inversas exatas
//!
//! Três pares inversíveis, um por família de esquema:
//!
//! - amplitudes de probabilidade (QPAM)
//! - ângulos de rotação (SQPAM, MSQPAM)
//! - inteiros quantizados (QSM, MQSM)

use crate::error::{SchemeError, SchemeResult};

/// Verifica se todas as amostras estão dentro do intervalo fechado
pub fn is_within_range(data: &[f64], min_val: f64, max_val: f64) -> bool {
    data.iter().all(|&x| x >= min_val && x <= max_val)
}

/// Converte amostras em amplitudes de probabilidade: desloca [-1, 1]
/// para [0, 1] e normaliza para um vetor unitário
///
/// Entrada toda-zero produz norma 0; nesse caso a norma é tratada como
/// 1 para evitar divisão por zero (silêncio continua decodificável).
pub fn convert_to_probability_amplitudes(data: &[f64]) -> (f64, Vec<f64>) {
    let shifted: Vec<f64> = data.iter().map(|&x| (x + 1.0) / 2.0).collect();
    let mut norm = shifted.iter().map(|&x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        norm = 1.0;
    }
    let amplitudes = shifted.iter().map(|&x| x / norm).collect();
    (norm, amplitudes)
}

/// Restaura amostras a partir das contagens observadas por estado:
/// `2 * norm * sqrt(count / shots) - 1`
pub fn convert_from_probability_amplitudes(counts: &[u64], norm: f64, shots: u64) -> Vec<f64> {
    counts
        .iter()
        .map(|&count| 2.0 * norm * (count as f64 / shots as f64).sqrt() - 1.0)
        .collect()
}

/// Converte amostras em ângulos de rotação:
/// `theta = arcsin(sqrt((x + 1) / 2))`
///
/// Falha com erro de validação se alguma amostra sair de [-1, 1].
pub fn convert_to_angles(data: &[f64]) -> SchemeResult<Vec<f64>> {
    if !is_within_range(data, -1.0, 1.0) {
        return Err(SchemeError::OutOfRange {
            min: -1.0,
            max: 1.0,
        });
    }
    Ok(data
        .iter()
        .map(|&x| ((x + 1.0) / 2.0).sqrt().asin())
        .collect())
}

/// Restaura amostras a partir dos acumuladores de cosseno e seno:
/// `x = 2 * sine / (sine + cosine) - 1`
///
/// Denominador zero (amostra nunca observada) produz razão 0 — uma
/// aproximação intencional e com perda, não um valor de sinal real.
pub fn convert_from_angles(cosine_amps: &[f64], sine_amps: &[f64]) -> Vec<f64> {
    cosine_amps
        .iter()
        .zip(sine_amps)
        .map(|(&cos, &sin)| {
            let total = cos + sin;
            let ratio = if total != 0.0 { sin / total } else { 0.0 };
            2.0 * ratio - 1.0
        })
        .collect()
}

/// Quantiza amostras como inteiros com sinal:
/// `value = trunc(x * 2^(depth - 1))`
///
/// Com perda sempre que `qubit_depth` for menor do que a precisão real
/// do sinal — fidelidade limitada faz parte da representação.
pub fn quantize(data: &[f64], qubit_depth: usize) -> Vec<i64> {
    let scale = (1i64 << (qubit_depth - 1)) as f64;
    data.iter().map(|&x| (x * scale) as i64).collect()
}

/// Dequantiza inteiros de volta ao intervalo de amostras:
/// `x = value / 2^(depth - 1)`
pub fn de_quantize(values: &[i64], bit_depth: usize) -> Vec<f64> {
    let scale = (1i64 << (bit_depth - 1)) as f64;
    values.iter().map(|&v| v as f64 / scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_probability_amplitudes_unit_norm() {
        let data = [0.0, -0.25, 0.5, 0.75, -0.75, -1.0, 0.25, 0.0];
        let (norm, amplitudes) = convert_to_probability_amplitudes(&data);
        let length: f64 = amplitudes.iter().map(|&a| a * a).sum();
        assert!((length - 1.0).abs() < EPS);
        // cada amplitude vale ((x+1)/2)/norm
        for (&x, &a) in data.iter().zip(&amplitudes) {
            assert!((a - ((x + 1.0) / 2.0) / norm).abs() < EPS);
        }
    }

    #[test]
    fn test_all_zero_input_norm_is_safe() {
        let data = [-1.0, -1.0, -1.0, -1.0];
        let (norm, amplitudes) = convert_to_probability_amplitudes(&data);
        assert_eq!(norm, 1.0);
        assert!(amplitudes.iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_probability_amplitudes_exact_inverse() {
        let data = [0.0, -0.25, 0.5, 0.75];
        let (norm, amplitudes) = convert_to_probability_amplitudes(&data);
        // contagens ideais: probabilidade * shots
        let shots = 1_000_000u64;
        let counts: Vec<u64> = amplitudes
            .iter()
            .map(|&a| (a * a * shots as f64).round() as u64)
            .collect();
        let restored = convert_from_probability_amplitudes(&counts, norm, shots);
        for (&x, &r) in data.iter().zip(&restored) {
            assert!((x - r).abs() < 1e-2);
        }
    }

    #[test]
    fn test_angles_domain_edges() {
        let angles = convert_to_angles(&[-1.0, 1.0]).unwrap();
        assert!((angles[0] - 0.0).abs() < EPS);
        assert!((angles[1] - std::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_angles_out_of_range_fails() {
        assert!(matches!(
            convert_to_angles(&[0.0, 1.5]),
            Err(SchemeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_angles_ratio_inverse() {
        let data = [0.0, -0.5, 0.5, 1.0];
        let angles = convert_to_angles(&data).unwrap();
        let shots_per_sample = 1_000_000.0;
        let sine: Vec<f64> = angles
            .iter()
            .map(|&t| t.sin().powi(2) * shots_per_sample)
            .collect();
        let cosine: Vec<f64> = angles
            .iter()
            .map(|&t| t.cos().powi(2) * shots_per_sample)
            .collect();
        let restored = convert_from_angles(&cosine, &sine);
        for (&x, &r) in data.iter().zip(&restored) {
            assert!((x - r).abs() < EPS);
        }
    }

    #[test]
    fn test_angles_zero_denominator_yields_zero() {
        let restored = convert_from_angles(&[0.0], &[0.0]);
        assert_eq!(restored, vec![-1.0]);
        // razão 0 ⇒ 2*0 - 1 = -1 no domínio das amostras
    }

    #[test]
    fn test_quantize_integer_exact_roundtrip() {
        let depth = 4;
        let values: Vec<i64> = (-8..8).collect();
        let data = de_quantize(&values, depth);
        assert_eq!(quantize(&data, depth), values);
    }

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(quantize(&[0.99, -0.99], 3), vec![3, -3]);
        assert_eq!(quantize(&[0.0], 3), vec![0]);
    }
}
