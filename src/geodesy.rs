//! Geodetic coordinates and local East-North-Up planarization.
use map_3d::{geodetic2ecef, Ellipsoid};
use nalgebra::{Matrix3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic coordinates on the WGS84 ellipsoid, at zero altitude.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(lat={:.7}°, long={:.7}°)", self.latitude, self.longitude)
    }
}

impl GeoPoint {
    /// Builds a new [GeoPoint] from decimal degrees, without verification.
    /// See [GeoPoint::is_valid].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if latitude lies within [-90, 90]° and longitude within [-180, 180]°.
    /// NaN coordinates are never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns ECEF coordinates (m)
    pub fn ecef(&self) -> Vector3<f64> {
        let (x, y, z) = geodetic2ecef(
            self.latitude.to_radians(),
            self.longitude.to_radians(),
            0.0,
            Ellipsoid::WGS84,
        );
        Vector3::new(x, y, z)
    }

    /// Horizontal distance (m) between two [GeoPoint]s, measured
    /// in the tangent plane anchored at `self`.
    pub fn horizontal_distance_m(&self, rhs: &Self) -> f64 {
        LocalFrame::new(*self).east_north(rhs).norm()
    }
}

/// [LocalFrame] projects [GeoPoint]s into the East-North-Up frame
/// tangent to the ellipsoid at its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFrame {
    origin: GeoPoint,
    origin_ecef: Vector3<f64>,
    /// ECEF to ENU rotation
    rotation: Matrix3<f64>,
}

impl LocalFrame {
    /// Builds a new [LocalFrame] anchored at `origin`.
    pub fn new(origin: GeoPoint) -> Self {
        let (lat, lon) = (origin.latitude.to_radians(), origin.longitude.to_radians());
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let rotation = Matrix3::<f64>::new(
            -sin_lon,
            cos_lon,
            0.0_f64,
            -sin_lat * cos_lon,
            -sin_lat * sin_lon,
            cos_lat,
            cos_lat * cos_lon,
            cos_lat * sin_lon,
            sin_lat,
        );

        Self {
            origin,
            origin_ecef: origin.ecef(),
            rotation,
        }
    }

    /// Returns the origin of this [LocalFrame]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Projects `point` into this [LocalFrame]: (east, north, up) in meters.
    pub fn enu(&self, point: &GeoPoint) -> Vector3<f64> {
        self.rotation * (point.ecef() - self.origin_ecef)
    }

    /// Horizontal (east, north) components of [Self::enu], in meters.
    pub fn east_north(&self, point: &GeoPoint) -> Vector2<f64> {
        let enu = self.enu(point);
        Vector2::new(enu[0], enu[1])
    }
}

#[cfg(test)]
mod test {
    use super::{GeoPoint, LocalFrame};

    #[test]
    fn origin_projects_to_zero() {
        let origin = GeoPoint::new(51.7548, -1.2544);
        let frame = LocalFrame::new(origin);
        assert!(frame.enu(&origin).norm() < 1.0E-6);
    }

    #[test]
    fn enu_axes() {
        let frame = LocalFrame::new(GeoPoint::new(0.0, 0.0));

        let north = frame.enu(&GeoPoint::new(0.001, 0.0));
        assert!(north[0].abs() < 1.0E-6);
        assert!(north[1] > 100.0);

        let east = frame.enu(&GeoPoint::new(0.0, 0.001));
        assert!(east[0] > 100.0);
        assert!(east[1].abs() < 1.0E-6);
    }

    #[test]
    fn ecef_reference_points() {
        let a = 6378137.0_f64;

        let ecef = GeoPoint::new(0.0, 0.0).ecef();
        assert!((ecef[0] - a).abs() < 1.0E-6);
        assert!(ecef[1].abs() < 1.0E-6 && ecef[2].abs() < 1.0E-6);

        let ecef = GeoPoint::new(0.0, 90.0).ecef();
        assert!(ecef[0].abs() < 1.0E-6);
        assert!((ecef[1] - a).abs() < 1.0E-6);

        // WGS84 semi-minor axis
        let ecef = GeoPoint::new(90.0, 0.0).ecef();
        assert!((ecef[2] - 6356752.314).abs() < 1.0E-3);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
