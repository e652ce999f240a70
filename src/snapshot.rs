//! Packed one-bit snapshot codec.
//!
//! Each byte carries 8 consecutive samples. The least significant bit
//! is the earliest sample of the group, a cleared bit is +1 and a set bit is -1.
//! This is imposed by the capture hardware.
use crate::{
    constants::{SNAPSHOT_BYTES, SNAPSHOT_SAMPLES},
    error::FormatError,
};

/// Decoded snapshot samples
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// Raw samples, each either +1 or -1
    Binary(Vec<i8>),
    /// Samples with their mean removed (no DC component)
    Normalized(Vec<f32>),
}

impl Samples {
    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            Self::Binary(samples) => samples.len(),
            Self::Normalized(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns raw ±1 samples, if not normalized
    pub fn as_binary(&self) -> Option<&[i8]> {
        match self {
            Self::Binary(samples) => Some(samples),
            Self::Normalized(_) => None,
        }
    }

    /// Returns DC-free samples, if normalized
    pub fn as_normalized(&self) -> Option<&[f32]> {
        match self {
            Self::Binary(_) => None,
            Self::Normalized(samples) => Some(samples),
        }
    }

    /// Converts to floating point samples, whatever the representation.
    pub fn to_f32(&self) -> Vec<f32> {
        match self {
            Self::Binary(samples) => samples.iter().map(|s| *s as f32).collect(),
            Self::Normalized(samples) => samples.clone(),
        }
    }
}

/// Sample value of `bit` (0 = earliest) within `byte`.
#[inline]
fn sample(byte: u8, bit: usize) -> i8 {
    if (byte >> bit) & 0x01 == 0 {
        1
    } else {
        -1
    }
}

fn check_length(bytes: &[u8]) -> Result<(), FormatError> {
    if bytes.len() != SNAPSHOT_BYTES {
        return Err(FormatError::SnapshotLength(bytes.len()));
    }
    Ok(())
}

/// Decodes a packed snapshot into its 49104 ±1 samples, in capture order.
pub fn decode_binary(bytes: &[u8]) -> Result<Vec<i8>, FormatError> {
    check_length(bytes)?;

    let mut samples = Vec::with_capacity(SNAPSHOT_SAMPLES);

    for byte in bytes.iter() {
        for bit in 0..8 {
            samples.push(sample(*byte, bit));
        }
    }

    samples.truncate(SNAPSHOT_SAMPLES);
    Ok(samples)
}

/// Decodes a packed snapshot and removes its mean value.
pub fn decode_normalized(bytes: &[u8]) -> Result<Vec<f32>, FormatError> {
    let samples = decode_binary(bytes)?;

    let mean = samples.iter().map(|s| *s as f64).sum::<f64>() / samples.len() as f64;

    Ok(samples
        .iter()
        .map(|s| (*s as f64 - mean) as f32)
        .collect())
}

/// Decodes a packed snapshot, see [decode_binary] and [decode_normalized].
pub fn decode(bytes: &[u8], normalize: bool) -> Result<Samples, FormatError> {
    if normalize {
        Ok(Samples::Normalized(decode_normalized(bytes)?))
    } else {
        Ok(Samples::Binary(decode_binary(bytes)?))
    }
}

/// Packs 49104 ±1 samples, in capture order, into the snapshot file format.
/// This is the exact inverse of [decode_binary].
pub fn encode(samples: &[i8]) -> Result<Vec<u8>, FormatError> {
    if samples.len() != SNAPSHOT_SAMPLES {
        return Err(FormatError::SampleCount(samples.len()));
    }

    let mut bytes = Vec::with_capacity(SNAPSHOT_BYTES);

    for group in samples.chunks(8) {
        let mut byte = 0u8;
        for (bit, value) in group.iter().enumerate() {
            match value {
                1 => {},
                -1 => byte |= 0x01 << bit,
                other => return Err(FormatError::SampleValue(*other)),
            }
        }
        bytes.push(byte);
    }

    Ok(bytes)
}
