/// Five decimal digits, the precision of Google's original algorithm (about one meter).
pub const PRECISION_5: u32 = 5;

/// Six decimal digits, as used by OSRM and Valhalla (about ten centimeters).
pub const PRECISION_6: u32 = 6;

/// Precision used when none is given.
pub const DEFAULT_PRECISION: u32 = PRECISION_5;

/// Returns `10^precision`.
///
/// Precisions too large for an `f64` exponent saturate to infinity.
pub fn scale_factor(precision: u32) -> f64 {
    10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}

/// Rounds `n` to `precision` decimal digits, halves away from zero.
pub fn round_to(n: f64, precision: u32) -> f64 {
    let factor = scale_factor(precision);
    (n * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(0), 1.0);
        assert_eq!(scale_factor(PRECISION_5), 100_000.0);
        assert_eq!(scale_factor(PRECISION_6), 1_000_000.0);
        assert!(scale_factor(u32::MAX).is_infinite());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(-179.9832104, 5), -179.98321);
        assert_eq!(round_to(48.2087714, 6), 48.208771);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
    }
}
