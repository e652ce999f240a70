use crate::{
    error::{Error, FormatError},
    geodesy::{GeoPoint, LocalFrame},
};

use itertools::Itertools;
use log::debug;
use nalgebra::Vector2;

/// Point of a [Track] closest to a probe location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Nearest {
    /// Horizontal distance between probe and track (m)
    pub distance_m: f64,
    /// Index of the closest segment, the one going from
    /// node `segment` to node `segment + 1`.
    pub segment: usize,
    /// Distance from the first node, along the track, to the closest point (m)
    pub along_track_m: f64,
}

/// Closest point of segment [a, b] to `p`, in planar coordinates.
fn closest_on_segment(p: &Vector2<f64>, a: &Vector2<f64>, b: &Vector2<f64>) -> Vector2<f64> {
    let ab = b - a;
    let length_sq = ab.norm_squared();

    if length_sq == 0.0 {
        return *a;
    }

    let t = ((p - a).dot(&ab) / length_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Ground truth [Track]: a polyline in the order the path was travelled.
/// Its nodes are not related to the snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    nodes: Vec<GeoPoint>,
    /// Planarization of the whole track, anchored at the first node
    frame: LocalFrame,
    /// Nodes projected into `frame` (east, north)
    planar: Vec<Vector2<f64>>,
}

impl Track {
    /// Builds a new [Track] from its nodes, in travel order.
    /// At least two valid nodes are required.
    pub fn new(nodes: Vec<GeoPoint>) -> Result<Self, FormatError> {
        if nodes.len() < 2 {
            return Err(FormatError::DegenerateTrack(nodes.len()));
        }

        if let Some(node) = nodes.iter().find(|node| !node.is_valid()) {
            return Err(FormatError::Coordinates {
                latitude: node.latitude,
                longitude: node.longitude,
            });
        }

        let frame = LocalFrame::new(nodes[0]);
        let planar = nodes.iter().map(|node| frame.east_north(node)).collect();

        debug!("track: {} nodes, origin {}", nodes.len(), frame.origin());

        Ok(Self {
            nodes,
            frame,
            planar,
        })
    }

    /// Track nodes, in travel order
    pub fn nodes(&self) -> &[GeoPoint] {
        &self.nodes
    }

    /// Total planar length of the track (m)
    pub fn length_m(&self) -> f64 {
        self.planar
            .iter()
            .tuple_windows()
            .map(|(a, b)| (b - a).norm())
            .sum()
    }

    /// Returns the point of the track that is closest to `probe`.
    /// It may lie anywhere on a segment, not only on a node.
    pub fn nearest(&self, probe: &GeoPoint) -> Nearest {
        let p = self.frame.east_north(probe);

        let mut nearest = Nearest {
            distance_m: f64::INFINITY,
            segment: 0,
            along_track_m: 0.0,
        };

        let mut travelled_m = 0.0;

        for (segment, (a, b)) in self.planar.iter().tuple_windows().enumerate() {
            let closest = closest_on_segment(&p, a, b);
            let distance_m = (p - closest).norm();

            if distance_m < nearest.distance_m {
                nearest = Nearest {
                    distance_m,
                    segment,
                    along_track_m: travelled_m + (closest - a).norm(),
                };
            }

            travelled_m += (b - a).norm();
        }

        nearest
    }
}

/// [GroundTruth] of a dataset
#[derive(Debug, Clone, PartialEq)]
pub enum GroundTruth {
    /// Static test: receiver did not move
    Point(GeoPoint),
    /// Dynamic test: receiver travelled along this [Track]
    Track(Track),
}

impl GroundTruth {
    /// Horizontal distance (m) from (`latitude`, `longitude`) in decimal degrees,
    /// to the ground truth location, or to the nearest point of the ground truth track.
    pub fn distance_to(&self, latitude: f64, longitude: f64) -> Result<f64, Error> {
        let probe = GeoPoint::new(latitude, longitude);

        if !probe.is_valid() {
            return Err(Error::InvalidArgument {
                latitude,
                longitude,
            });
        }

        let distance_m = match self {
            Self::Point(point) => point.horizontal_distance_m(&probe),
            Self::Track(track) => track.nearest(&probe).distance_m,
        };

        if distance_m.is_nan() {
            Ok(f64::INFINITY)
        } else {
            Ok(distance_m)
        }
    }
}
