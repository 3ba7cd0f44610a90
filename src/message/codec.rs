//! Character codec for the WSPR packing alphabets.

use super::encode_error::EncodeError;

/// Map a character to its WSPR numeric code: digits 0-9, letters 10-35,
/// space 36. Anything else is rejected before it can corrupt the packed
/// payload.
pub fn code(ch: char) -> Result<u8, EncodeError> {
    match ch {
        '0'..='9' => Ok(ch as u8 - b'0'),
        ' ' => Ok(36),
        'A'..='Z' => Ok(ch as u8 - b'A' + 10),
        _ => Err(EncodeError::InvalidCharacter { ch }),
    }
}

/// Base-37 digit used by the three character prefix field of type 2
/// messages. Inputs are expected to have been validated already.
pub fn encode_char(ch: char) -> u8 {
    match ch {
        ' ' => 36,
        '0'..='9' => ch as u8 - b'0',
        _ => ch as u8 - b'A' + 10,
    }
}
