pub mod constants;
mod chunks;

pub use chunks::{Chunks, fold_sign, unfold_sign};
pub use constants::{
    CHARACTER_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, MAX_CHARACTER, MAX_CHUNKS,
    MIN_CHARACTER,
};

/// Returns `true` if `character` closes a value, i.e. its continuation bit is clear.
pub fn is_terminator(character: char) -> bool {
    (character as i32 - CHARACTER_OFFSET) & CONTINUATION_BIT == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminator() {
        assert!(is_terminator('?'));
        assert!(is_terminator('^'));
        assert!(!is_terminator('_'));
        assert!(!is_terminator('~'));
        // 'a' - 63 = 34, continuation bit set
        assert!(!is_terminator('a'));
    }
}
