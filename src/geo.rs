//! Great-circle distance between geographical coordinates.
//!
//! Distances are computed with the haversine formula on a spherical Earth,
//! so results ignore ellipsoidal flattening (errors up to roughly 0.5%).

use std::f64::consts::PI;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Mean Earth diameter in kilometers.
pub const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are decimal degrees. Ranges are not validated.
///
/// # Examples
///
/// ```
/// use dmi_open_data::LatLon;
///
/// let copenhagen = LatLon(55.707722, 12.562119);
/// assert_eq!(copenhagen.0, 55.707722); // Latitude
/// assert_eq!(copenhagen.1, 12.562119); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Haversine distance in kilometers to `other`. See [`distance`].
    pub fn distance_to(&self, other: &LatLon) -> f64 {
        distance(self.0, self.1, other.0, other.1)
    }
}

/// Calculates the distance in kilometers between two geographical points.
///
/// All arguments are decimal degrees. The result is symmetric in its two points
/// and exactly `0.0` for identical points.
///
/// The intermediate haversine term is clamped to `[0, 1]` so floating-point
/// drift near antipodal points can never leave the domain of `sqrt`/`asin`;
/// any finite input yields a finite distance.
///
/// # Examples
///
/// ```
/// use dmi_open_data::distance;
///
/// let d = distance(55.707722, 12.562119, 55.707722, 12.562119);
/// assert_eq!(d, 0.0);
///
/// // Copenhagen to Aarhus is roughly 157 km as the crow flies.
/// let d = distance(55.6761, 12.5683, 56.1629, 10.2039);
/// assert!((150.0..165.0).contains(&d));
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let p = PI / 180.0;
    let a = 0.5 - ((lat2 - lat1) * p).cos() / 2.0
        + (lat1 * p).cos() * (lat2 * p).cos() * (1.0 - ((lon2 - lon1) * p).cos()) / 2.0;
    let a = a.clamp(0.0, 1.0);
    EARTH_DIAMETER_KM * a.sqrt().asin()
}
