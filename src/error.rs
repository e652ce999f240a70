use thiserror::Error;

/// Optional [Metadata](crate::prelude::Metadata) fields,
/// that only some datasets recorded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    /// Ambient temperature (°C)
    Temperature,
    /// Ambient pressure (Pa)
    Pressure,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Pressure => write!(f, "pressure"),
        }
    }
}

/// Malformed input, detected while decoding or ingesting.
/// A [FormatError] raised at construction time prevents the
/// [Dataset](crate::prelude::Dataset) from existing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Packed snapshot buffers are exactly 6138 bytes long.
    #[error("snapshot buffer is {0} bytes long, expecting 6138")]
    SnapshotLength(usize),

    /// Snapshots are exactly 49104 samples long.
    #[error("snapshot has {0} samples, expecting 49104")]
    SampleCount(usize),

    /// Only +1 / -1 samples can be packed.
    #[error("invalid sample value {0} (expecting +1 or -1)")]
    SampleValue(i8),

    #[error("missing \"{0}\" in metadata")]
    MissingField(&'static str),

    /// Per-snapshot metadata arrays must all describe the same snapshots.
    #[error("\"{field}\" has {found} entries, expecting {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid intermediate frequency {0} Hz")]
    IntermediateFrequency(f64),

    #[error("invalid timestamp \"{0}\"")]
    Timestamp(String),

    /// A track needs at least one segment.
    #[error("ground truth track has {0} node(s), needs at least 2")]
    DegenerateTrack(usize),

    /// Ingested coordinates out of [-90, 90] x [-180, 180].
    #[error("invalid coordinates (lat={latitude}°, long={longitude}°)")]
    Coordinates { latitude: f64, longitude: f64 },

    #[error("metadata parsing error: {0}")]
    Json(String),

    /// Ground truth track file could not be interpreted.
    #[error("track parsing error: {0}")]
    Track(String),

    #[error("unknown ground truth file format \"{0}\"")]
    UnknownTrackFormat(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Neither a ground truth track nor a static ground truth location
    /// were provided for this dataset.
    #[error("no ground truth location or track")]
    MissingGroundTruth,

    /// This dataset did not record this [Field]. Never masked
    /// as an empty serie.
    #[error("{0} not available for this dataset")]
    NotAvailable(Field),

    #[error("snapshot index {index} out of range (dataset size is {size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// Probe coordinates out of [-90, 90] x [-180, 180] (or not finite).
    #[error("invalid probe coordinates (lat={latitude}°, long={longitude}°)")]
    InvalidArgument { latitude: f64, longitude: f64 },

    /// Failure of the underlying storage.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
