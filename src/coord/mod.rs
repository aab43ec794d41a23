mod point;

pub use point::Point;

use geo_types::Coord;

/// Trait for types that can provide a latitude/longitude pair.
///
/// Implemented for [`Point`], `(f64, f64)` tuples read as `(latitude, longitude)`,
/// and `geo_types::Point<f64>` / `geo_types::Coord<f64>` where `x` is the longitude.
/// This allows the encoders to accept any of these types.
pub trait LatLng {
    /// Returns the latitude in decimal degrees.
    fn latitude(&self) -> f64;
    /// Returns the longitude in decimal degrees.
    fn longitude(&self) -> f64;
}

impl LatLng for Point {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl LatLng for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }
    fn longitude(&self) -> f64 {
        self.1
    }
}

impl LatLng for geo_types::Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }
    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl LatLng for Coord<f64> {
    fn latitude(&self) -> f64 {
        self.y
    }
    fn longitude(&self) -> f64 {
        self.x
    }
}
