/// Error type for strict polyline decoding.
///
/// The permissive decoders never return this; only [`crate::try_decode`] and the
/// serde adapters built on it do.
#[derive(Debug, Clone, PartialEq)]
pub enum PolylineError {
    /// A character outside the `'?'..='~'` range of the format.
    InvalidCharacter { position: usize, character: char },
    /// The input ends inside a value (last character still has its continuation bit set).
    TruncatedValue { position: usize },
    /// A single value spans more characters than fit into 32 bits.
    ValueOverflow { position: usize },
    /// The input holds an odd number of values, so the last latitude has no longitude.
    UnpairedCoordinate { count: usize },
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::InvalidCharacter {
                position,
                character,
            } => write!(f, "Invalid character {:?} at position {}", character, position),
            PolylineError::TruncatedValue { position } => {
                write!(f, "Truncated value starting at position {}", position)
            }
            PolylineError::ValueOverflow { position } => {
                write!(f, "Value starting at position {} overflows 32 bits", position)
            }
            PolylineError::UnpairedCoordinate { count } => {
                write!(f, "Odd number of coordinate values: {}", count)
            }
        }
    }
}

impl std::error::Error for PolylineError {}
