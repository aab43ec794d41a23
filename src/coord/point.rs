use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// A single position on a polyline, in decimal degrees.
///
/// No range checks are made; any pair of finite values is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Point {
    /// Reads the tuple as `(latitude, longitude)`.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.latitude, point.longitude)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Coord {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_from_tuple_is_lat_lng() {
        let point = Point::from((38.5, -120.2));
        assert_eq!(point.latitude, 38.5);
        assert_eq!(point.longitude, -120.2);

        let back: (f64, f64) = point.into();
        assert_eq!(back, (38.5, -120.2));
    }

    #[test]
    fn test_geo_types_point_axis_order() {
        let geo = point! { x: -120.2, y: 38.5 };
        let point = Point::from(geo);
        assert_eq!(point, Point::new(38.5, -120.2));

        let back: geo_types::Point<f64> = point.into();
        assert_eq!(back, geo);
    }

    #[test]
    fn test_geo_types_coord_axis_order() {
        let c = coord! { x: 16.372572, y: 48.208771 };
        let point = Point::from(c);
        assert_eq!(point, Point::new(48.208771, 16.372572));

        let back: Coord<f64> = point.into();
        assert_eq!(back, c);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Point::new(1.5, -2.25)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.25}"#);

        let point: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(point, Point::new(1.5, -2.25));
    }
}
