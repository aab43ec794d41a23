mod batch;
mod codec;
mod line;
mod scan;

pub use batch::{EncodePolylines, par_decode};
pub use codec::{decode, decode5, decode6, encode, encode5, encode6, try_decode};
pub use line::{Polyline, decode_line_string, encode_line_string};
