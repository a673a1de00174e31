//! Testes ponta a ponta: codificação, simulação e decodificação

use qar_core::SampleArray;
use qar_schemes::{
    DecodeOptions, Mqsm, Msqpam, Qpam, Qsm, Scheme, SchemeName, Sqpam, api,
};

use crate::StatevectorExecutor;

const FIXTURE: [f64; 7] = [0.0, -0.25, 0.5, 0.75, -0.75, -1.0, 0.25];

fn stereo_fixture() -> SampleArray {
    SampleArray::from_channels(vec![
        vec![0.0, -0.25, 0.5, 0.75],
        vec![-0.75, -1.0, 0.25, 0.0],
    ])
    .unwrap()
}

fn mean_squared_error(expected: &[f64], actual: &[f64]) -> f64 {
    assert_eq!(expected.len(), actual.len());
    expected
        .iter()
        .zip(actual)
        .map(|(&x, &y)| (x - y).powi(2))
        .sum::<f64>()
        / expected.len() as f64
}

#[test]
fn test_qpam_roundtrip() {
    let scheme = Qpam::new();
    let data = SampleArray::from_mono(FIXTURE.to_vec());
    let mut circuit = scheme.encode(&data).unwrap();
    let restored = scheme
        .decode(&mut circuit, &StatevectorExecutor::new())
        .unwrap();
    assert_eq!(restored.num_samples(), 7);
    assert!(mean_squared_error(&FIXTURE, restored.channel(0)) < 0.05);
}

#[test]
fn test_sqpam_roundtrip() {
    let scheme = Sqpam::new();
    let data = SampleArray::from_mono(FIXTURE.to_vec());
    let mut circuit = scheme.encode(&data).unwrap();
    let restored = scheme
        .decode(&mut circuit, &StatevectorExecutor::new())
        .unwrap();
    assert!(mean_squared_error(&FIXTURE, restored.channel(0)) < 0.05);
}

#[test]
fn test_qsm_roundtrip_is_exact() {
    let scheme = Qsm::new();
    let data = SampleArray::from_mono(FIXTURE.to_vec());
    let mut circuit = scheme.encode(&data).unwrap();
    let restored = scheme
        .decode(&mut circuit, &StatevectorExecutor::new())
        .unwrap();
    // leitura nominal: sem erro estatístico
    assert_eq!(restored.channel(0), &FIXTURE);
}

#[test]
fn test_msqpam_roundtrip_stereo() {
    let scheme = Msqpam::new();
    let data = stereo_fixture();
    let mut circuit = scheme.encode(&data).unwrap();
    let restored = scheme
        .decode(&mut circuit, &StatevectorExecutor::new())
        .unwrap();
    assert_eq!(restored.num_channels(), 2);
    for c in 0..2 {
        assert!(mean_squared_error(data.channel(c), restored.channel(c)) < 0.05);
    }
}

#[test]
fn test_mqsm_roundtrip_stereo_is_exact() {
    let scheme = Mqsm::new();
    let data = stereo_fixture();
    let mut circuit = scheme.encode(&data).unwrap();
    let restored = scheme
        .decode(&mut circuit, &StatevectorExecutor::new())
        .unwrap();
    assert_eq!(restored.channel(0), data.channel(0));
    assert_eq!(restored.channel(1), data.channel(1));
}

#[test]
fn test_facade_roundtrip_all_schemes() {
    let executor = StatevectorExecutor::new();
    let mono = SampleArray::from_mono(FIXTURE.to_vec());
    let stereo = stereo_fixture();
    for name in SchemeName::all() {
        let data = if name.is_multi_channel() {
            &stereo
        } else {
            &mono
        };
        let mut circuit = api::encode(data, name).unwrap();
        let restored = api::decode(&mut circuit, &executor, DecodeOptions::default()).unwrap();
        assert_eq!(restored.num_channels(), data.num_channels(), "{name}");
        assert_eq!(restored.num_samples(), data.num_samples(), "{name}");
        for c in 0..data.num_channels() {
            assert!(
                mean_squared_error(data.channel(c), restored.channel(c)) < 0.05,
                "{name}"
            );
        }
    }
}

#[test]
fn test_decode_without_explicit_backend() {
    let data = SampleArray::from_mono(FIXTURE.to_vec());
    let mut circuit = api::encode(&data, SchemeName::Qpam).unwrap();
    // nenhum executor injetado: o simulador deste crate é o padrão
    let restored = crate::decode(&mut circuit).unwrap();
    assert_eq!(restored.num_samples(), 7);
    assert!(mean_squared_error(&FIXTURE, restored.channel(0)) < 0.05);

    let mut circuit = api::encode(&data, SchemeName::Qsm).unwrap();
    let options = DecodeOptions {
        shots: 1000,
        ..Default::default()
    };
    let restored = crate::decode_with(&mut circuit, options).unwrap();
    assert_eq!(restored.channel(0), &FIXTURE);
}

#[test]
fn test_more_shots_reduce_qpam_error() {
    let scheme = Qpam::new();
    let data = SampleArray::from_mono(FIXTURE.to_vec());
    let executor = StatevectorExecutor::new();

    let mut errors = Vec::new();
    for shots in [100u64, 10_000, 1_000_000] {
        let mut circuit = scheme.encode(&data).unwrap();
        let options = DecodeOptions {
            shots,
            ..Default::default()
        };
        let restored = scheme
            .decode_with(&mut circuit, &executor, options)
            .unwrap();
        errors.push(mean_squared_error(&FIXTURE, restored.channel(0)));
    }
    assert!(errors[2] <= errors[0]);
    assert!(errors[2] < 1e-4);
}
