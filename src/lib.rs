//! # polyline-rs
//!
//! Encoder and decoder for the
//! [Encoded Polyline Algorithm Format](https://developers.google.com/maps/documentation/utilities/polylinealgorithm).
//!
//! ### 1. Free functions
//!
//! ```
//! use polyline_rs::{Point, decode, encode};
//!
//! let path = vec![
//!     Point::new(38.5, -120.2),
//!     Point::new(40.7, -120.95),
//!     Point::new(43.252, -126.453),
//! ];
//!
//! let encoded = encode(&path, 5);
//! assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! assert_eq!(decode(&encoded, 5), path);
//! ```
//!
//! Precision is usually 5 (Google, about one meter) or 6 (OSRM, Valhalla, about ten
//! centimeters), and there are shortcuts for both:
//!
//! ```
//! use polyline_rs::{decode6, encode6};
//!
//! let points = decode6("ewl}zAwthf^ctAobBsUnl@");
//! assert_eq!(points.len(), 3);
//! assert_eq!(encode6(&points), "ewl}zAwthf^ctAobBsUnl@");
//! ```
//!
//! ### 2. `Polyline` and geo-types
//!
//! ```
//! use polyline_rs::Polyline;
//! use geo_types::line_string;
//!
//! let line = line_string![(x: -120.2, y: 38.5), (x: -120.95, y: 40.7)];
//! let polyline = Polyline::from_line_string(&line, 5);
//! assert_eq!(polyline.to_string(), "_p~iF~ps|U_ulLnnqC");
//! assert_eq!(polyline.to_line_string(), line);
//! ```
//!
//! ### 3. Strict decoding
//!
//! [`decode`] never fails and drops malformed trailing input. [`try_decode`] reports it:
//!
//! ```
//! use polyline_rs::{PolylineError, decode, try_decode};
//!
//! assert!(decode("a", 5).is_empty());
//! assert_eq!(try_decode("a", 5), Err(PolylineError::TruncatedValue { position: 0 }));
//! ```

pub mod chunk;
pub mod coord;
pub mod error;
pub mod polyline;
pub mod precision;
pub mod serde_polyline;

pub use chunk::{Chunks, fold_sign, unfold_sign};
pub use coord::{LatLng, Point};
pub use error::PolylineError;
pub use polyline::{
    EncodePolylines, Polyline, decode, decode_line_string, decode5, decode6, encode,
    encode_line_string, encode5, encode6, par_decode, try_decode,
};
pub use precision::{DEFAULT_PRECISION, PRECISION_5, PRECISION_6};

pub use geo_types;
