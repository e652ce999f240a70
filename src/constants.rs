/// One-bit front-end sampling rate (Hz)
pub const SAMPLING_RATE_HZ: f64 = 4.092E6;

/// Nominal intermediate frequency of the front-end (Hz).
/// Each dataset carries its own calibrated estimate.
pub const NOMINAL_INTERMEDIATE_FREQUENCY_HZ: f64 = 4.092E6;

/// Duration of one snapshot (s)
pub const SNAPSHOT_DURATION_S: f64 = 12.0E-3;

/// Number of samples in one snapshot: 12 ms at 4.092 MHz
pub const SNAPSHOT_SAMPLES: usize = 49_104;

/// Number of packed bytes in one snapshot file (8 samples per byte)
pub const SNAPSHOT_BYTES: usize = SNAPSHOT_SAMPLES.div_ceil(8);

/// Length of one degree of arc along the WGS84 equator (m)
pub const EQUATORIAL_DEGREE_M: f64 = 111_320.0;
