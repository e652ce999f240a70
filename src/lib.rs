#![doc = include_str!("../README.md")]

// private modules
mod cfg;
mod constants;
mod dataset;
mod error;
mod geodesy;
mod ground_truth;
mod metadata;
mod snapshot;
mod source;

#[cfg(feature = "directory")]
mod directory;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::constants::{
        EQUATORIAL_DEGREE_M, NOMINAL_INTERMEDIATE_FREQUENCY_HZ, SAMPLING_RATE_HZ, SNAPSHOT_BYTES,
        SNAPSHOT_DURATION_S, SNAPSHOT_SAMPLES,
    };
    pub use crate::dataset::Dataset;
    #[cfg(feature = "directory")]
    pub use crate::directory::Directory;
    pub use crate::error::{Error, Field, FormatError};
    pub use crate::geodesy::{GeoPoint, LocalFrame};
    pub use crate::ground_truth::{GroundTruth, Nearest, Track};
    pub use crate::metadata::{Metadata, MetadataRecord};
    pub use crate::snapshot::{decode, decode_binary, decode_normalized, encode, Samples};
    pub use crate::source::DatasetSource;
    // re-export
    pub use hifitime::{Epoch, TimeScale};
    pub use nalgebra::{Vector2, Vector3};
}

// pub export
pub use error::Error;
