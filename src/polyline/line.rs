use crate::coord::Point;
use crate::error::PolylineError;
use crate::polyline::codec::{decode, encode, try_decode};
use crate::precision::DEFAULT_PRECISION;
use geo_types::{Coord, LineString};

/// A decoded path together with the precision it is encoded at.
///
/// # Example
///
/// ```
/// use polyline_rs::{Point, Polyline};
///
/// let line = Polyline::new(vec![Point::new(38.5, -120.2), Point::new(40.7, -120.95)]);
/// assert_eq!(line.precision(), 5);
/// assert_eq!(line.to_string(), "_p~iF~ps|U_ulLnnqC");
///
/// let line = line.with_precision(6);
/// let restored = Polyline::decode(&line.encode(), 6);
/// assert_eq!(restored, line);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    precision: u32,
}

impl Polyline {
    /// Creates a polyline at the default precision of 5.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Decodes `text`, discarding any malformed tail (see [`crate::decode`]).
    pub fn decode(text: &str, precision: u32) -> Self {
        Self {
            points: decode(text, precision),
            precision,
        }
    }

    /// Decodes `text`, failing on anything the encoder could not have produced.
    pub fn try_decode(text: &str, precision: u32) -> Result<Self, PolylineError> {
        Ok(Self {
            points: try_decode(text, precision)?,
            precision,
        })
    }

    /// Builds a polyline from a `LineString` whose `x` is longitude and `y` latitude.
    pub fn from_line_string(line: &LineString<f64>, precision: u32) -> Self {
        Self {
            points: line.0.iter().map(|&c| Point::from(c)).collect(),
            precision,
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn encode(&self) -> String {
        encode(&self.points, self.precision)
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.points.iter().map(|&p| Coord::from(p)).collect())
    }
}

impl std::fmt::Display for Polyline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Polyline> for LineString<f64> {
    fn from(polyline: Polyline) -> Self {
        polyline.to_line_string()
    }
}

/// Encodes a `LineString` (`x` = longitude, `y` = latitude).
///
/// # Example
/// ```
/// use polyline_rs::encode_line_string;
/// use geo_types::line_string;
///
/// let line = line_string![(x: -120.2, y: 38.5), (x: -120.95, y: 40.7)];
/// assert_eq!(encode_line_string(&line, 5), "_p~iF~ps|U_ulLnnqC");
/// ```
pub fn encode_line_string(line: &LineString<f64>, precision: u32) -> String {
    encode(&line.0, precision)
}

/// Decodes a polyline string into a `LineString` (`x` = longitude, `y` = latitude).
pub fn decode_line_string(text: &str, precision: u32) -> LineString<f64> {
    Polyline::decode(text, precision).to_line_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(38.5, -120.2),
            Point::new(40.7, -120.95),
            Point::new(43.252, -126.453),
        ]
    }

    #[test]
    fn test_new_defaults() {
        let line = Polyline::new(sample());
        assert_eq!(line.precision(), DEFAULT_PRECISION);
        assert_eq!(line.len(), 3);
        assert!(!line.is_empty());
        assert_eq!(line.points(), &sample()[..]);
    }

    #[test]
    fn test_display_is_encoded() {
        let line = Polyline::new(sample());
        assert_eq!(format!("{}", line), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_decode_roundtrip() -> Result<(), PolylineError> {
        let line = Polyline::new(sample());
        let restored = Polyline::try_decode(&line.encode(), 5)?;
        assert_eq!(restored, line);
        assert_eq!(restored.into_points(), sample());
        Ok(())
    }

    #[test]
    fn test_try_decode_propagates_error() {
        assert_eq!(
            Polyline::try_decode("a", 6),
            Err(PolylineError::TruncatedValue { position: 0 })
        );
    }

    #[test]
    fn test_line_string_conversion() {
        let line = line_string![
            (x: -120.2, y: 38.5),
            (x: -120.95, y: 40.7),
            (x: -126.453, y: 43.252)
        ];

        let polyline = Polyline::from_line_string(&line, 5);
        assert_eq!(polyline.points(), &sample()[..]);
        assert_eq!(polyline.to_line_string(), line);

        let back: LineString<f64> = polyline.into();
        assert_eq!(back, line);
    }

    #[test]
    fn test_encode_decode_line_string() {
        let line = line_string![(x: 16.372572, y: 48.208771), (x: 16.374164, y: 48.210133)];
        let encoded = encode_line_string(&line, 6);
        assert_eq!(encoded, "ewl}zAwthf^ctAobB");
        assert_eq!(decode_line_string(&encoded, 6), line);
    }

    #[test]
    fn test_empty() {
        let line = Polyline::new(Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.encode(), "");
        assert_eq!(line.to_line_string().0.len(), 0);
        assert_eq!(Polyline::decode("", 5), line);
    }
}
