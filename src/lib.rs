//! Takes UTF-8 codepoints as strings, `U+0000` or `\U00000000`, and
//! encodes them according to the UTF-8 standard. For an explanation of
//! the byte layout, see the Wikipedia article on UTF-8 encoding.
//! <https://en.wikipedia.org/wiki/UTF-8#Encoding>

pub mod error;
mod utf8sequence;

use log::trace;

pub use crate::error::ConvertError;
pub use crate::utf8sequence::Utf8Sequence;

/// Converts a codepoint designator in the format `U+0000` or
/// `\U00000000` into the bytes that represent the corresponding UTF-8
/// encoding.
///
/// The characters after the prefix are parsed as case-insensitive
/// hexadecimal, and the parsed value must fall within one of the four
/// UTF-8 width bands (up to `U+10FFFF`).
pub fn convert(codepoint: &str) -> Result<Utf8Sequence, ConvertError> {
    trace!("convert: {codepoint:?}");
    let Some(prefix) = codepoint.get(..2) else {
        return Err(ConvertError::InvalidCodepoint);
    };
    if prefix != "U+" && prefix != "\\U" {
        return Err(ConvertError::InvalidCodepoint);
    }
    // Extract the hex number after the prefix.
    let value = isize::from_str_radix(&codepoint[2..], 16)?;
    Utf8Sequence::encode(value)
}
