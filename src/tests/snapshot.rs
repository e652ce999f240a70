use crate::{
    prelude::{
        decode, decode_binary, decode_normalized, encode, FormatError, Samples, SNAPSHOT_BYTES,
        SNAPSHOT_SAMPLES,
    },
    tests::{init_logger, random_snapshot},
};

use rstest::*;

#[test]
fn snapshot_geometry() {
    assert_eq!(SNAPSHOT_SAMPLES, 49104);
    assert_eq!(SNAPSHOT_BYTES, 6138);
    assert_eq!(
        (crate::prelude::SAMPLING_RATE_HZ * crate::prelude::SNAPSHOT_DURATION_S).round() as usize,
        SNAPSHOT_SAMPLES
    );
}

#[test]
fn least_significant_bit_first() {
    init_logger();

    let mut bytes = vec![0u8; SNAPSHOT_BYTES];
    bytes[0] = 0b0110_0000;

    let samples = decode_binary(&bytes).unwrap();
    assert_eq!(samples.len(), SNAPSHOT_SAMPLES);
    assert_eq!(samples[..8], [1, 1, 1, 1, 1, -1, -1, 1]);
    assert!(samples[8..].iter().all(|s| *s == 1));
}

#[rstest]
#[case(0x00, [1, 1, 1, 1, 1, 1, 1, 1])]
#[case(0xff, [-1, -1, -1, -1, -1, -1, -1, -1])]
#[case(0x01, [-1, 1, 1, 1, 1, 1, 1, 1])]
#[case(0x80, [1, 1, 1, 1, 1, 1, 1, -1])]
#[case(0b1010_0101, [-1, 1, -1, 1, 1, -1, 1, -1])]
fn byte_to_samples(#[case] byte: u8, #[case] expected: [i8; 8]) {
    let mut bytes = vec![0u8; SNAPSHOT_BYTES];
    bytes[SNAPSHOT_BYTES - 1] = byte;

    let samples = decode_binary(&bytes).unwrap();
    assert_eq!(samples[SNAPSHOT_SAMPLES - 8..], expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(SNAPSHOT_BYTES - 1)]
#[case(SNAPSHOT_BYTES + 1)]
#[case(2 * SNAPSHOT_BYTES)]
fn wrong_buffer_length(#[case] len: usize) {
    let bytes = vec![0u8; len];

    assert_eq!(decode_binary(&bytes), Err(FormatError::SnapshotLength(len)));
    assert_eq!(decode_normalized(&bytes), Err(FormatError::SnapshotLength(len)));
    assert_eq!(decode(&bytes, false), Err(FormatError::SnapshotLength(len)));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
fn random_buffers(#[case] seed: u64) {
    let bytes = random_snapshot(seed);

    let samples = decode_binary(&bytes).unwrap();
    assert_eq!(samples.len(), SNAPSHOT_SAMPLES);
    assert!(samples.iter().all(|s| *s == 1 || *s == -1));

    let normalized = decode_normalized(&bytes).unwrap();
    assert_eq!(normalized.len(), SNAPSHOT_SAMPLES);

    let mean = normalized.iter().map(|s| *s as f64).sum::<f64>() / SNAPSHOT_SAMPLES as f64;
    assert!(mean.abs() < 1.0E-6, "residual mean {}", mean);

    // polarity pattern is preserved
    for (raw, norm) in samples.iter().zip(normalized.iter()) {
        assert_eq!(norm.is_sign_positive(), *raw > 0);
    }
}

#[test]
fn normalized_constant_signal() {
    let bytes = vec![0xffu8; SNAPSHOT_BYTES];
    let normalized = decode_normalized(&bytes).unwrap();
    assert!(normalized.iter().all(|s| *s == 0.0));
}

#[test]
fn normalized_unbalanced_signal() {
    // 1/8 of -1 samples: mean = (7 - 1) / 8 = 0.75
    let bytes = vec![0x01u8; SNAPSHOT_BYTES];
    let normalized = decode_normalized(&bytes).unwrap();

    assert!((normalized[0] - (-1.75)).abs() < 1.0E-6);
    assert!((normalized[1] - 0.25).abs() < 1.0E-6);
}

#[test]
fn samples_representation() {
    let bytes = random_snapshot(7);

    let binary = decode(&bytes, false).unwrap();
    let normalized = decode(&bytes, true).unwrap();

    assert!(matches!(binary, Samples::Binary(_)));
    assert!(matches!(normalized, Samples::Normalized(_)));

    assert_eq!(binary.len(), SNAPSHOT_SAMPLES);
    assert_eq!(normalized.len(), SNAPSHOT_SAMPLES);
    assert!(!binary.is_empty());

    assert!(binary.as_normalized().is_none());
    assert!(normalized.as_binary().is_none());

    let raw = binary.as_binary().unwrap();
    let as_f32 = binary.to_f32();
    assert_eq!(as_f32[0], raw[0] as f32);

    assert_eq!(normalized.to_f32(), normalized.as_normalized().unwrap());
}

#[test]
fn encoding_is_decoding_inverse() {
    let pattern = (0..SNAPSHOT_SAMPLES)
        .map(|i| if (i * 7919) % 13 < 5 { -1 } else { 1 })
        .collect::<Vec<i8>>();

    let bytes = encode(&pattern).unwrap();
    assert_eq!(bytes.len(), SNAPSHOT_BYTES);
    assert_eq!(decode_binary(&bytes).unwrap(), pattern);

    let bytes = random_snapshot(3);
    let samples = decode_binary(&bytes).unwrap();
    assert_eq!(encode(&samples).unwrap(), bytes);
}

#[test]
fn encoding_first_byte() {
    let mut pattern = vec![1i8; SNAPSHOT_SAMPLES];
    pattern[5] = -1;
    pattern[6] = -1;

    let bytes = encode(&pattern).unwrap();
    assert_eq!(bytes[0], 0b0110_0000);
    assert!(bytes[1..].iter().all(|b| *b == 0));
}

#[test]
fn encoding_errors() {
    assert_eq!(encode(&[1, -1]), Err(FormatError::SampleCount(2)));

    let mut pattern = vec![1i8; SNAPSHOT_SAMPLES];
    pattern[100] = 0;
    assert_eq!(encode(&pattern), Err(FormatError::SampleValue(0)));
}
