use crate::chunk::{CHUNK_BITS, Chunks, MAX_CHARACTER, MAX_CHUNKS, MIN_CHARACTER, fold_sign};
use crate::coord::{LatLng, Point};
use crate::error::PolylineError;
use crate::polyline::scan::{Group, scan};
use crate::precision::{PRECISION_5, PRECISION_6, round_to, scale_factor};

/// Encodes a sequence of points to the "Encoded Polyline Algorithm Format".
///
/// # Process
///
/// 1. For each point, subtracts the previous input point (starting from `(0, 0)`)
/// 2. Scales each delta by `10^precision` and rounds half away from zero
/// 3. Folds the sign into bit 0 (see [`fold_sign`])
/// 4. Splits the result into 5-bit chunks and renders them as characters
/// 5. Appends the latitude value, then the longitude value
///
/// Deltas are taken against the raw input values, not the rounded ones.
/// Deltas beyond the 32-bit range wrap rather than panic.
///
/// # Example
/// ```
/// use polyline_rs::encode;
///
/// let path = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
/// assert_eq!(encode(&path, 5), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode<C: LatLng>(points: &[C], precision: u32) -> String {
    let factor = scale_factor(precision);
    let mut encoded = String::with_capacity(points.len() * 2 * MAX_CHUNKS);

    let mut latitude = 0.0;
    let mut longitude = 0.0;

    for point in points {
        encoded.push_str(&encode_value(point.latitude() - latitude, factor));
        encoded.push_str(&encode_value(point.longitude() - longitude, factor));

        latitude = point.latitude();
        longitude = point.longitude();
    }

    log::trace!(
        "encoded {} points at precision {} into {} characters",
        points.len(),
        precision,
        encoded.len()
    );
    encoded
}

/// [`encode`] with precision 5, accurate to about one meter.
pub fn encode5<C: LatLng>(points: &[C]) -> String {
    encode(points, PRECISION_5)
}

/// [`encode`] with precision 6, accurate to about ten centimeters.
pub fn encode6<C: LatLng>(points: &[C]) -> String {
    encode(points, PRECISION_6)
}

/// Decodes a polyline string into points.
///
/// Decoding is permissive: it never fails. An unterminated trailing value or a
/// latitude without its longitude is discarded, so malformed input yields
/// whatever complete points precede the damage (possibly none). Use
/// [`try_decode`] to reject such input instead.
///
/// # Example
/// ```
/// use polyline_rs::{Point, decode};
///
/// let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 5);
/// assert_eq!(points[0], Point::new(38.5, -120.2));
/// assert_eq!(points[2], Point::new(43.252, -126.453));
///
/// assert!(decode("a", 5).is_empty());
/// ```
pub fn decode(text: &str, precision: u32) -> Vec<Point> {
    let scan = scan(text);
    if let Some(position) = scan.trailing {
        log::debug!("discarding unterminated value at byte {}", position);
    }

    let values: Vec<f64> = scan
        .groups
        .iter()
        .map(|group| Chunks::parse(group.text).coordinate(precision))
        .collect();

    if values.len() % 2 != 0 {
        log::debug!("discarding unpaired value, {} values decoded", values.len());
    }

    assemble(&values, precision)
}

/// [`decode`] with precision 5.
pub fn decode5(text: &str) -> Vec<Point> {
    decode(text, PRECISION_5)
}

/// [`decode`] with precision 6.
pub fn decode6(text: &str) -> Vec<Point> {
    decode(text, PRECISION_6)
}

/// Decodes a polyline string, rejecting anything the encoder could not have produced.
///
/// On success the result is identical to [`decode`].
///
/// # Errors
///
/// - [`PolylineError::InvalidCharacter`] - A character outside `'?'..='~'`
/// - [`PolylineError::ValueOverflow`] - A value does not fit into 32 bits
/// - [`PolylineError::TruncatedValue`] - The input ends inside a value
/// - [`PolylineError::UnpairedCoordinate`] - The last latitude has no longitude
///
/// # Example
/// ```
/// use polyline_rs::{PolylineError, try_decode};
///
/// assert_eq!(try_decode("ewl}zAwthf^", 6)?.len(), 1);
/// assert_eq!(
///     try_decode("ewl}zA", 6),
///     Err(PolylineError::UnpairedCoordinate { count: 1 })
/// );
/// # Ok::<(), PolylineError>(())
/// ```
pub fn try_decode(text: &str, precision: u32) -> Result<Vec<Point>, PolylineError> {
    if let Some((position, character)) = text
        .char_indices()
        .find(|(_, c)| !(MIN_CHARACTER..=MAX_CHARACTER).contains(c))
    {
        return Err(PolylineError::InvalidCharacter {
            position,
            character,
        });
    }

    let scan = scan(text);
    let values = scan
        .groups
        .iter()
        .map(|group| checked_chunks(group).map(|chunks| chunks.coordinate(precision)))
        .collect::<Result<Vec<f64>, PolylineError>>()?;

    if let Some(position) = scan.trailing {
        return Err(PolylineError::TruncatedValue { position });
    }
    if values.len() % 2 != 0 {
        return Err(PolylineError::UnpairedCoordinate {
            count: values.len(),
        });
    }

    Ok(assemble(&values, precision))
}

fn encode_value(delta: f64, factor: f64) -> String {
    let scaled = (delta * factor).round() as i64 as i32;
    Chunks::from_value(fold_sign(scaled)).to_text()
}

/// Parses a group, failing if it carries bits past the 32nd.
fn checked_chunks(group: &Group<'_>) -> Result<Chunks, PolylineError> {
    let chunks = Chunks::parse(group.text);
    let spare_bits = MAX_CHUNKS as u32 * CHUNK_BITS - i32::BITS;
    let overflows = match chunks.len() {
        n if n > MAX_CHUNKS => true,
        MAX_CHUNKS => chunks.as_slice()[MAX_CHUNKS - 1] >> (CHUNK_BITS - spare_bits) != 0,
        _ => false,
    };

    if overflows {
        return Err(PolylineError::ValueOverflow {
            position: group.position,
        });
    }
    Ok(chunks)
}

/// Pairs flat deltas into points and accumulates them into absolute positions.
fn assemble(values: &[f64], precision: u32) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(values.len() / 2);

    for pair in values.chunks_exact(2) {
        let latitude = round_to(pair[0], precision);
        let longitude = round_to(pair[1], precision);

        let point = match points.last() {
            Some(previous) => Point::new(
                round_to(previous.latitude + latitude, precision),
                round_to(previous.longitude + longitude, precision),
            ),
            None => Point::new(latitude, longitude),
        };
        points.push(point);
    }

    points
}
