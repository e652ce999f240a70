//! Datasets stored in a directory: `meta.json`, one `.bin` file per
//! snapshot, and optional `ground_truth*.gpx` / `ground_truth*.kml` track files.
use crate::{
    cfg::Config,
    constants::SNAPSHOT_BYTES,
    error::{Error, FormatError},
    geodesy::GeoPoint,
    metadata::MetadataRecord,
    source::DatasetSource,
};

use log::{debug, info, warn};

use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use xml::reader::{EventReader, XmlEvent};

/// Collects every track point (or route point, if no track) of a GPX document.
pub(crate) fn parse_gpx<R: Read>(reader: R) -> Result<Vec<GeoPoint>, FormatError> {
    let gpx = gpx::read(reader).map_err(|e| FormatError::Track(e.to_string()))?;

    let mut nodes = gpx
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .map(|waypoint| {
            let point = waypoint.point();
            GeoPoint::new(point.y(), point.x())
        })
        .collect::<Vec<_>>();

    if nodes.is_empty() {
        nodes = gpx
            .routes
            .iter()
            .flat_map(|route| route.points.iter())
            .map(|waypoint| {
                let point = waypoint.point();
                GeoPoint::new(point.y(), point.x())
            })
            .collect();
    }

    Ok(nodes)
}

/// Parses KML `<coordinates>` content: whitespace separated `long,lat[,alt]` tuples.
pub(crate) fn parse_kml_coordinates(content: &str) -> Result<Vec<GeoPoint>, FormatError> {
    let mut nodes = Vec::new();

    for tuple in content.split_whitespace() {
        let mut items = tuple.split(',').map(|item| item.trim().parse::<f64>());

        match (items.next(), items.next()) {
            (Some(Ok(longitude)), Some(Ok(latitude))) => {
                nodes.push(GeoPoint::new(latitude, longitude));
            },
            _ => {
                return Err(FormatError::Track(format!(
                    "invalid kml coordinates \"{}\"",
                    tuple
                )));
            },
        }
    }

    Ok(nodes)
}

/// Collects the coordinates of every `<LineString>` of a KML document.
pub(crate) fn parse_kml<R: Read>(reader: R) -> Result<Vec<GeoPoint>, FormatError> {
    let mut nodes = Vec::new();

    let mut line_depth = 0usize;
    let mut coordinates: Option<String> = None;

    for event in EventReader::new(reader) {
        match event.map_err(|e| FormatError::Track(e.to_string()))? {
            XmlEvent::StartElement { name, .. } => match name.local_name.as_str() {
                "LineString" => line_depth += 1,
                "coordinates" if line_depth > 0 => coordinates = Some(String::new()),
                _ => {},
            },
            XmlEvent::EndElement { name } => match name.local_name.as_str() {
                "LineString" => line_depth = line_depth.saturating_sub(1),
                "coordinates" => {
                    if let Some(content) = coordinates.take() {
                        nodes.extend(parse_kml_coordinates(&content)?);
                    }
                },
                _ => {},
            },
            XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                if let Some(content) = coordinates.as_mut() {
                    content.push_str(&text);
                }
            },
            XmlEvent::Whitespace(_) => {
                if let Some(content) = coordinates.as_mut() {
                    content.push(' ');
                }
            },
            _ => {},
        }
    }

    Ok(nodes)
}

/// Dataset [Directory], served as a [DatasetSource].
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
    cfg: Config,
}

impl Directory {
    /// Serves the dataset located in `root`, with default [Config].
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_config(root, Config::default())
    }

    /// Serves the dataset located in `root`, with custom [Config].
    pub fn with_config<P: AsRef<Path>>(root: P, cfg: Config) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            cfg,
        }
    }

    /// Dataset directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ground truth track files, in file name order.
    fn track_files(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();

            let is_track = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&self.cfg.ground_truth_prefix));

            if is_track && path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

impl DatasetSource for Directory {
    fn metadata(&self) -> Result<MetadataRecord, Error> {
        let path = self.root.join(&self.cfg.metadata_file);
        debug!("reading metadata from {}", path.display());

        let content = fs::read_to_string(&path)?;

        let record = serde_json::from_str::<MetadataRecord>(&content)
            .map_err(|e| FormatError::Json(e.to_string()))?;

        Ok(record)
    }

    fn track(&self) -> Result<Option<Vec<GeoPoint>>, Error> {
        let files = self.track_files()?;

        if files.is_empty() {
            return Ok(None);
        }

        let mut nodes = Vec::new();

        for path in files.iter() {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_lowercase())
                .unwrap_or_default();

            let reader = BufReader::new(File::open(path)?);

            let part = match extension.as_str() {
                "gpx" => parse_gpx(reader)?,
                "kml" => parse_kml(reader)?,
                _ => {
                    return Err(FormatError::UnknownTrackFormat(path.display().to_string()).into());
                },
            };

            info!(
                "ground truth track {}: {} nodes",
                path.display(),
                part.len()
            );

            nodes.extend(part);
        }

        if files.len() > 1 {
            warn!(
                "ground truth track concatenated from {} files, in file name order",
                files.len()
            );
        }

        Ok(Some(nodes))
    }

    fn snapshot(&self, file: &str) -> Result<Vec<u8>, Error> {
        let mut bytes = fs::read(self.root.join(file))?;

        if !self.cfg.strict_snapshot_length && bytes.len() > SNAPSHOT_BYTES {
            debug!("{}: truncating {} bytes", file, bytes.len());
            bytes.truncate(SNAPSHOT_BYTES);
        }

        Ok(bytes)
    }
}
