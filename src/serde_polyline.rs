//! Serde adapters that store a `Vec<Point>` field as its encoded polyline string.
//!
//! ```
//! use polyline_rs::Point;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Route {
//!     name: String,
//!     #[serde(with = "polyline_rs::serde_polyline::precision6")]
//!     geometry: Vec<Point>,
//! }
//!
//! let route = Route {
//!     name: "vienna".to_string(),
//!     geometry: vec![Point::new(48.208771, 16.372572)],
//! };
//! let json = serde_json::to_string(&route).unwrap();
//! assert_eq!(json, r#"{"name":"vienna","geometry":"ewl}zAwthf^"}"#);
//! ```

use crate::coord::Point;
use crate::polyline::{encode, try_decode};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

fn serialize_at<S: Serializer>(
    points: &[Point],
    precision: u32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(points, precision))
}

fn deserialize_at<'de, D: Deserializer<'de>>(
    precision: u32,
    deserializer: D,
) -> Result<Vec<Point>, D::Error> {
    let text = String::deserialize(deserializer)?;
    try_decode(&text, precision).map_err(D::Error::custom)
}

/// Precision 5 (Google's original format).
pub mod precision5 {
    use super::*;
    use crate::precision::PRECISION_5;

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(points, PRECISION_5, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        deserialize_at(PRECISION_5, deserializer)
    }
}

/// Precision 6 (OSRM, Valhalla).
pub mod precision6 {
    use super::*;
    use crate::precision::PRECISION_6;

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(points, PRECISION_6, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        deserialize_at(PRECISION_6, deserializer)
    }
}
