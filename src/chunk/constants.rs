/// Offset added to every chunk so the rendered character lands in the printable ASCII range.
pub const CHARACTER_OFFSET: i32 = 63;

/// Number of payload bits carried by each chunk.
pub const CHUNK_BITS: u32 = 5;

/// Mask selecting the payload bits of a chunk.
pub const CHUNK_MASK: i32 = 0b11111;

/// Bit set on every chunk of a value except the last one.
pub const CONTINUATION_BIT: i32 = 0x20;

/// Maximum number of chunks a 32-bit value can occupy.
pub const MAX_CHUNKS: usize = 7;

/// Lowest character the format produces (chunk `0`, no continuation).
pub const MIN_CHARACTER: char = '?';

/// Highest character the format produces (chunk `31` with continuation).
pub const MAX_CHARACTER: char = '~';
