use crate::{
    error::{Error, Field, FormatError},
    geodesy::GeoPoint,
    prelude::{Epoch, TimeScale},
};

use log::{debug, warn};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// [MetadataRecord] is the dataset description, as ingested
/// (for example from a `meta.json` file). Field names follow that file.
/// It is verified and turned into [Metadata] with [Metadata::try_from].
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct MetadataRecord {
    /// Intermediate frequency estimate (Hz)
    pub intermediate_frequency: Option<f64>,
    /// Snapshot file names, in capture order
    pub file: Option<Vec<String>>,
    /// UTC capture instants, ISO-8601 with millisecond resolution
    pub timestamp: Option<Vec<String>>,
    /// Ambient temperatures (°C)
    pub temperature: Option<Vec<f64>>,
    /// Ambient pressures (Pa)
    pub pressure: Option<Vec<f64>>,
    /// Static ground truth latitude (ddeg)
    pub latitude: Option<f64>,
    /// Static ground truth longitude (ddeg)
    pub longitude: Option<f64>,
}

/// Parses one UTC capture instant.
pub(crate) fn parse_timestamp(s: &str) -> Result<Epoch, FormatError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    let t = Epoch::from_str(trimmed).map_err(|_| FormatError::Timestamp(s.to_string()))?;
    Ok(t.to_time_scale(TimeScale::UTC))
}

/// Verifies that an optional per-snapshot serie describes `size` snapshots.
fn check_serie(
    field: &'static str,
    serie: Option<Vec<f64>>,
    size: usize,
) -> Result<Option<Vec<f64>>, FormatError> {
    match serie {
        Some(values) if values.len() != size => Err(FormatError::LengthMismatch {
            field,
            expected: size,
            found: values.len(),
        }),
        serie => Ok(serie),
    }
}

/// Immutable dataset [Metadata], one entry per snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Intermediate frequency (Hz)
    intermediate_frequency: f64,
    /// Snapshot files, in capture order
    files: Vec<String>,
    /// Capture instants, in UTC
    timestamps: Vec<Epoch>,
    /// Ambient temperatures (°C), when recorded
    temperatures: Option<Vec<f64>>,
    /// Ambient pressures (Pa), when recorded
    pressures: Option<Vec<f64>>,
    /// Static location, when described in metadata
    location: Option<GeoPoint>,
}

impl TryFrom<MetadataRecord> for Metadata {
    type Error = FormatError;

    fn try_from(record: MetadataRecord) -> Result<Self, Self::Error> {
        let intermediate_frequency = record
            .intermediate_frequency
            .ok_or(FormatError::MissingField("intermediate_frequency"))?;

        if !(intermediate_frequency.is_finite() && intermediate_frequency > 0.0) {
            return Err(FormatError::IntermediateFrequency(intermediate_frequency));
        }

        let files = record.file.ok_or(FormatError::MissingField("file"))?;
        let size = files.len();

        let timestamps = record
            .timestamp
            .ok_or(FormatError::MissingField("timestamp"))?
            .iter()
            .map(|s| parse_timestamp(s))
            .collect::<Result<Vec<_>, _>>()?;

        if timestamps.len() != size {
            return Err(FormatError::LengthMismatch {
                field: "timestamp",
                expected: size,
                found: timestamps.len(),
            });
        }

        if timestamps.windows(2).any(|w| w[1] < w[0]) {
            warn!("snapshot timestamps are not in chronological order");
        }

        let temperatures = check_serie("temperature", record.temperature, size)?;
        let pressures = check_serie("pressure", record.pressure, size)?;

        let location = match (record.latitude, record.longitude) {
            (Some(latitude), Some(longitude)) => {
                let point = GeoPoint::new(latitude, longitude);
                if !point.is_valid() {
                    return Err(FormatError::Coordinates {
                        latitude,
                        longitude,
                    });
                }
                Some(point)
            },
            (Some(_), None) => return Err(FormatError::MissingField("longitude")),
            (None, Some(_)) => return Err(FormatError::MissingField("latitude")),
            (None, None) => None,
        };

        debug!(
            "metadata: {} snapshots, if={:.3}Hz, temperature={}, pressure={}",
            size,
            intermediate_frequency,
            temperatures.is_some(),
            pressures.is_some()
        );

        Ok(Self {
            intermediate_frequency,
            files,
            timestamps,
            temperatures,
            pressures,
            location,
        })
    }
}

impl Metadata {
    /// Number of snapshots described
    pub fn size(&self) -> usize {
        self.files.len()
    }

    /// Intermediate frequency (Hz)
    pub fn intermediate_frequency(&self) -> f64 {
        self.intermediate_frequency
    }

    /// Snapshot file names, in capture order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Capture instants (UTC), `timestamps()[i]` being that of `files()[i]`.
    pub fn timestamps(&self) -> &[Epoch] {
        &self.timestamps
    }

    /// Ambient temperatures (°C), one per snapshot.
    pub fn temperatures(&self) -> Result<&[f64], Error> {
        self.temperatures
            .as_deref()
            .ok_or(Error::NotAvailable(Field::Temperature))
    }

    /// Ambient pressures (Pa), one per snapshot.
    pub fn pressures(&self) -> Result<&[f64], Error> {
        self.pressures
            .as_deref()
            .ok_or(Error::NotAvailable(Field::Pressure))
    }

    /// Static ground truth location, if described.
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}
