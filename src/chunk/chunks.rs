use crate::chunk::constants::{CHARACTER_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, MAX_CHUNKS};
use crate::precision::scale_factor;

/// The 5-bit groups of a single encoded value, least-significant group first.
///
/// # Text Format
///
/// Each chunk becomes one character:
///
/// | Bits | Meaning                                                  |
/// |------|----------------------------------------------------------|
/// | 0-4  | Payload, five bits of the encoded integer                |
/// | 5    | Continuation flag, set on every chunk except the last    |
///
/// The 6-bit result is offset by [`CHARACTER_OFFSET`] (63) so every character
/// falls between `'?'` and `'~'`.
///
/// # Example
/// ```
/// use polyline_rs::{Chunks, fold_sign};
///
/// // 38.5 at precision 5
/// let chunks = Chunks::from_value(fold_sign(3_850_000));
/// assert_eq!(chunks.as_slice(), &[0, 17, 31, 10, 7]);
/// assert_eq!(chunks.to_text(), "_p~iF");
///
/// let parsed = Chunks::parse("_p~iF");
/// assert_eq!(parsed.coordinate(5), 38.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chunks(Vec<i32>);

impl Chunks {
    /// Splits an already sign-folded integer into 5-bit groups.
    ///
    /// The value is read as raw 32 bits. Zero produces a single zero chunk.
    pub fn from_value(value: i32) -> Self {
        let mut rest = value as u32;
        let mut groups = Vec::with_capacity(MAX_CHUNKS);

        loop {
            groups.push((rest & CHUNK_MASK as u32) as i32);
            rest >>= CHUNK_BITS;
            if rest == 0 {
                break;
            }
        }

        Self(groups)
    }

    /// Reads one value's worth of text back into chunks.
    ///
    /// Every character but the last has its continuation bit masked off. Characters
    /// outside the format's range are taken as-is; no validation happens here.
    pub fn parse(text: &str) -> Self {
        let count = text.chars().count();
        let groups = text
            .chars()
            .enumerate()
            .map(|(index, character)| {
                let value = character as i32 - CHARACTER_OFFSET;
                if index + 1 != count {
                    value & CHUNK_MASK
                } else {
                    value
                }
            })
            .collect();

        Self(groups)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the chunks as format characters.
    pub fn to_text(&self) -> String {
        add_offset(&mark_continuation(&self.0))
    }

    /// Reassembles the sign-folded integer from its chunks.
    ///
    /// Groups past the 32nd bit are dropped and additions wrap, so this never panics.
    pub fn folded_value(&self) -> i32 {
        self.0.iter().enumerate().fold(0i32, |acc, (index, &chunk)| {
            let shift = (index as u32).saturating_mul(CHUNK_BITS);
            acc.wrapping_add(chunk.checked_shl(shift).unwrap_or(0))
        })
    }

    /// Reassembles the signed, scaled integer (the inverse of [`fold_sign`]).
    pub fn value(&self) -> i32 {
        unfold_sign(self.folded_value())
    }

    /// Converts the chunks to a coordinate delta at the given precision.
    pub fn coordinate(&self, precision: u32) -> f64 {
        self.value() as f64 / scale_factor(precision)
    }
}

impl From<Vec<i32>> for Chunks {
    fn from(groups: Vec<i32>) -> Self {
        Self(groups)
    }
}

/// Doubles `scaled` and inverts it when negative, so the sign ends up in bit 0.
pub fn fold_sign(scaled: i32) -> i32 {
    let doubled = scaled.wrapping_shl(1);
    if scaled < 0 { !doubled } else { doubled }
}

/// Recovers the signed integer from its folded form.
pub fn unfold_sign(folded: i32) -> i32 {
    let value = if folded & 1 == 1 { !folded } else { folded };
    value >> 1
}

fn mark_continuation(groups: &[i32]) -> Vec<i32> {
    let last = groups.len().saturating_sub(1);
    groups
        .iter()
        .enumerate()
        .map(|(index, &group)| {
            if index < last {
                group | CONTINUATION_BIT
            } else {
                group
            }
        })
        .collect()
}

fn add_offset(groups: &[i32]) -> String {
    groups
        .iter()
        .map(|&group| (group.wrapping_add(CHARACTER_OFFSET) as u8) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_single_chunk() {
        let chunks = Chunks::from_value(0);
        assert_eq!(chunks.as_slice(), &[0]);
        assert_eq!(chunks.to_text(), "?");
    }

    #[test]
    fn test_from_value_groups() {
        assert_eq!(Chunks::from_value(30).as_slice(), &[30]);
        assert_eq!(Chunks::from_value(32).as_slice(), &[0, 1]);
        assert_eq!(
            Chunks::from_value(fold_sign(-17998321)).as_slice(),
            &[1, 31, 16, 10, 2, 1]
        );
    }

    #[test]
    fn test_from_value_uses_all_bits() {
        // wrapped values still render into at most seven characters
        let chunks = Chunks::from_value(-2);
        assert_eq!(chunks.len(), MAX_CHUNKS);
        assert_eq!(chunks.to_text(), "}~~~~~B");
    }

    #[test]
    fn test_render_marks_all_but_last() {
        assert_eq!(mark_continuation(&[0, 17, 31]), vec![32, 49, 31]);
        assert_eq!(add_offset(&[32, 49, 31]), "_p^");
        assert_eq!(mark_continuation(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_fold_sign() {
        assert_eq!(fold_sign(0), 0);
        assert_eq!(fold_sign(1), 2);
        assert_eq!(fold_sign(-1), 1);
        assert_eq!(fold_sign(3_850_000), 7_700_000);
        assert_eq!(fold_sign(-7_944_800), 15_889_599);
    }

    #[test]
    fn test_unfold_sign_inverts_fold() {
        for scaled in [0, 1, -1, 15, -16, 3_850_000, -17_998_321, i32::MAX / 2, i32::MIN / 2] {
            assert_eq!(unfold_sign(fold_sign(scaled)), scaled);
        }
    }

    #[test]
    fn test_parse_masks_continuation() {
        let chunks = Chunks::parse("`~oia@");
        assert_eq!(chunks.as_slice(), &[1, 31, 16, 10, 2, 1]);
        assert_eq!(chunks.value(), -17998321);
    }

    #[test]
    fn test_coordinate() {
        assert_eq!(Chunks::parse("~d|cN").coordinate(5), -79.448);
        assert_eq!(Chunks::parse("?").coordinate(6), 0.0);
    }

    #[test]
    fn test_parse_then_render() {
        let chunks = Chunks::parse("_p~iF");
        assert_eq!(chunks.to_text(), "_p~iF");
    }

    #[test]
    fn test_folded_value_ignores_bits_past_32() {
        let chunks = Chunks::from(vec![1, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(chunks.folded_value(), 1);
    }

    #[test]
    fn test_empty_chunks() {
        let chunks = Chunks::parse("");
        assert!(chunks.is_empty());
        assert_eq!(chunks.value(), 0);
        assert_eq!(chunks.to_text(), "");
    }
}
