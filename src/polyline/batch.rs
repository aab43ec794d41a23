use crate::coord::Point;
use crate::polyline::codec::{decode, encode};
use crate::polyline::line::Polyline;
use rayon::prelude::*;

/// Trait for encoding many independent paths in parallel.
///
/// Implemented for `[Vec<Point>]` and `[Polyline]`. Output order matches input order.
pub trait EncodePolylines {
    /// Encodes every path at `precision`.
    fn par_encode(&self, precision: u32) -> Vec<String>;
}

impl EncodePolylines for [Vec<Point>] {
    fn par_encode(&self, precision: u32) -> Vec<String> {
        self.par_iter()
            .map(|points| encode(points, precision))
            .collect()
    }
}

impl EncodePolylines for [Polyline] {
    /// Each polyline is encoded at `precision`, not at its own.
    fn par_encode(&self, precision: u32) -> Vec<String> {
        self.par_iter()
            .map(|line| encode(line.points(), precision))
            .collect()
    }
}

/// Decodes many polyline strings in parallel, preserving order.
pub fn par_decode<S>(texts: &[S], precision: u32) -> Vec<Vec<Point>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| decode(text.as_ref(), precision))
        .collect()
}
