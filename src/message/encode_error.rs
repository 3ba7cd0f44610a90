use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum EncodeError {
    /// A character outside the WSPR alphabet reached the bit packer
    ///
    /// Must be in " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    #[snafu(display("character '{ch}' is outside the WSPR alphabet"))]
    InvalidCharacter { ch: char },

    /// Call sign cannot be hashed or packed; the composite hash string
    /// must be 3 to 10 characters long
    #[snafu(display("call sign cannot be encoded"))]
    InvalidCallsign,

    /// Type 3 locator must be exactly six characters
    #[snafu(display("six character locator required"))]
    InvalidLocator,

    /// Prefix must be one to three characters
    #[snafu(display("prefix must be one to three characters"))]
    InvalidPrefix,

    /// Suffix code out of range
    ///
    /// Valid codes are 0..=81: 0-35 for a single digit or letter,
    /// 36..=81 for the two digit numbers 00-45
    #[snafu(display("suffix code must be 0..=81"))]
    InvalidSuffix,
}
