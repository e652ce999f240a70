use crate::{
    error::Error,
    ground_truth::{GroundTruth, Track},
    metadata::Metadata,
    prelude::Epoch,
    snapshot::{self, Samples},
    source::DatasetSource,
};

#[cfg(feature = "directory")]
use crate::{cfg::Config, directory::Directory};

use log::{debug, info};

/// GNSS snapshot [Dataset]: one-bit raw snapshots, their capture [Metadata]
/// and the [GroundTruth] they were captured at (static test) or along (dynamic test).
///
/// [Dataset] is immutable once built. Only snapshot contents are read on demand,
/// from its [DatasetSource].
#[derive(Debug, Clone)]
pub struct Dataset<S: DatasetSource> {
    source: S,
    metadata: Metadata,
    ground_truth: GroundTruth,
}

#[cfg(feature = "directory")]
impl Dataset<Directory> {
    /// Opens the dataset stored in `path`, with default [Config].
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        Self::new(Directory::new(path))
    }

    /// Opens the dataset stored in `path`, with custom [Config].
    pub fn open_with_config<P: AsRef<std::path::Path>>(path: P, cfg: Config) -> Result<Self, Error> {
        Self::new(Directory::with_config(path, cfg))
    }
}

impl<S: DatasetSource> Dataset<S> {
    /// Builds a new [Dataset] from its [DatasetSource].
    /// A ground truth track takes precedence over a static location
    /// described in the metadata.
    pub fn new(source: S) -> Result<Self, Error> {
        let metadata = Metadata::try_from(source.metadata()?)?;

        let ground_truth = match source.track()? {
            Some(nodes) => GroundTruth::Track(Track::new(nodes)?),
            None => match metadata.location() {
                Some(point) => GroundTruth::Point(point),
                None => return Err(Error::MissingGroundTruth),
            },
        };

        match &ground_truth {
            GroundTruth::Point(point) => info!(
                "static dataset: {} snapshots, ground truth {}",
                metadata.size(),
                point
            ),
            GroundTruth::Track(track) => info!(
                "dynamic dataset: {} snapshots, ground truth track of {:.1}m",
                metadata.size(),
                track.length_m()
            ),
        }

        Ok(Self {
            source,
            metadata,
            ground_truth,
        })
    }

    /// Number of snapshots in this [Dataset]
    pub fn size(&self) -> usize {
        self.metadata.size()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.size() {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Reads and decodes snapshot `index`: 12 ms sampled at 4.092 MHz,
    /// so 49104 samples. When `normalize` is set, the mean value is removed
    /// from the samples.
    pub fn snapshot(&self, index: usize, normalize: bool) -> Result<Samples, Error> {
        let file = self.file(index)?;
        debug!("snapshot #{}: {}", index, file);

        let bytes = self.source.snapshot(file)?;
        Ok(snapshot::decode(&bytes, normalize)?)
    }

    /// [GroundTruth] of this [Dataset]
    pub fn ground_truth(&self) -> &GroundTruth {
        &self.ground_truth
    }

    /// [Metadata] of this [Dataset]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Intermediate frequency (Hz)
    pub fn intermediate_frequency(&self) -> f64 {
        self.metadata.intermediate_frequency()
    }

    /// Snapshot file names, in capture order
    pub fn files(&self) -> &[String] {
        self.metadata.files()
    }

    /// File name of snapshot `index`
    pub fn file(&self, index: usize) -> Result<&str, Error> {
        self.check_index(index)?;
        Ok(&self.metadata.files()[index])
    }

    /// Capture instants (UTC), one per snapshot
    pub fn timestamps(&self) -> &[Epoch] {
        self.metadata.timestamps()
    }

    /// Capture instant (UTC) of snapshot `index`
    pub fn timestamp(&self, index: usize) -> Result<Epoch, Error> {
        self.check_index(index)?;
        Ok(self.metadata.timestamps()[index])
    }

    /// Ambient temperatures (°C), one per snapshot.
    /// Fails with [Error::NotAvailable] when not recorded.
    pub fn temperatures(&self) -> Result<&[f64], Error> {
        self.metadata.temperatures()
    }

    /// Ambient pressures (Pa), one per snapshot.
    /// Fails with [Error::NotAvailable] when not recorded.
    pub fn pressures(&self) -> Result<&[f64], Error> {
        self.metadata.pressures()
    }

    /// Horizontal error (m) of the (`latitude`, `longitude`) estimate in decimal degrees,
    /// with respect to the ground truth location, or to the nearest point of the
    /// ground truth track.
    pub fn error(&self, latitude: f64, longitude: f64) -> Result<f64, Error> {
        self.ground_truth.distance_to(latitude, longitude)
    }
}
