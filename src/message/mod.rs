use tracing::debug;

mod callsign;
mod callsign_hash;
mod channel_symbols;
mod codec;
pub mod constants;
mod convolve;
pub mod encode_error;
mod grid;
mod interleave;
mod pack;

pub use encode_error::EncodeError;

use constants::SYMBOL_COUNT;

/// Auxiliary call sign augmentation carried by type 2 and type 3 messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Augmentation {
    /// One to three character prefix, e.g. "PJ4" in PJ4/K1ABC
    Prefix(String),
    /// Suffix code 0..=81: 0-35 for a single digit or letter,
    /// 36..=81 for the two digit numbers 00-45
    Suffix(u8),
}

/// WSPR message type. There is no auto detection; the caller selects the
/// wire format explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageVariant {
    /// Type 1: call sign, 4 character locator and power
    Standard,
    /// Type 2: call sign with prefix or suffix and power, no locator
    PrefixSuffix(Augmentation),
    /// Type 3: hashed call sign, 6 character locator and power
    HashedLocator {
        locator: String,
        augmentation: Augmentation,
    },
}

/// Encode a station identity into the 162 quaternary WSPR tone symbols.
///
/// The call sign and locator are normalized first (space padding, case
/// folding, the `"AA00"` locator fallback), then packed, convolutionally
/// encoded, interleaved and merged with the sync vector. Power is passed
/// through unclamped; range checking is the caller's responsibility.
///
/// The returned symbols are tone indices 0-3 for the transmitter driver;
/// this crate knows nothing about frequencies or timing slots.
///
/// # Example
/// ```
/// use rustywspr::{encode, MessageVariant};
///
/// let symbols = encode("K1ABC", "FN42", 37, &MessageVariant::Standard)?;
/// assert_eq!(symbols.len(), 162);
/// # Ok::<(), rustywspr::EncodeError>(())
/// ```
pub fn encode(
    callsign: &str,
    locator: &str,
    power_dbm: u8,
    variant: &MessageVariant,
) -> Result<[u8; SYMBOL_COUNT], EncodeError> {
    let callsign6 = callsign::normalize_callsign(callsign);
    let locator4 = grid::normalize_locator(locator);
    debug!(%callsign6, %locator4, power_dbm, "normalized station identity");

    let payload = pack::pack_payload(&callsign6, &locator4, power_dbm, callsign, variant)?;
    let parity = convolve::convolve(&payload);
    let interleaved = interleave::interleave(&parity);
    Ok(channel_symbols::channel_symbols(&interleaved))
}
