//! Bit packing of the normalized message into the 11 byte payload.
//!
//! Every message type produces two fields: `n`, a 28 bit value carried in
//! the call sign slot, and `m`, a 22 bit locator/power value. The fields
//! are serialized MSB first into 50 significant bits and zero padded to
//! 88; the padding still runs through the convolutional encoder.

use bitvec::prelude::*;
use tracing::trace;

use crate::util::bitvec_utils::PackBitvecFieldType;

use super::callsign_hash::callsign_hash;
use super::codec::{code, encode_char};
use super::constants::PAYLOAD_BYTES;
use super::encode_error::EncodeError;
use super::{Augmentation, MessageVariant};

/// Pack the normalized message into the payload buffer for the requested
/// message type. Type 3 hashes the raw (unnormalized) call sign.
pub fn pack_payload(
    callsign6: &str,
    locator4: &str,
    power_dbm: u8,
    raw_callsign: &str,
    variant: &MessageVariant,
) -> Result<[u8; PAYLOAD_BYTES], EncodeError> {
    let (n, m) = match variant {
        MessageVariant::Standard => (
            callsign_field(callsign6)?,
            locator_power_field(locator4, power_dbm),
        ),
        MessageVariant::PrefixSuffix(augmentation) => (
            callsign_field(callsign6)?,
            prefix_suffix_field(augmentation, power_dbm)?,
        ),
        MessageVariant::HashedLocator {
            locator,
            augmentation,
        } => (
            locator6_field(locator)?,
            hash_power_field(raw_callsign, augmentation, power_dbm)?,
        ),
    };
    trace!(n, m, "packed message fields");

    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    n.pack_into_bitvec(&mut bits, 28);
    m.pack_into_bitvec(&mut bits, 22);
    bits.resize(PAYLOAD_BYTES * 8, false);

    let mut payload = [0u8; PAYLOAD_BYTES];
    payload.copy_from_slice(bits.as_raw_slice());
    Ok(payload)
}

/// Pack six characters through the 36*36*10*27*27*27 mixed radix call
/// sign field. The last three positions are 27-ary over letters and
/// space, hence the offset by 10.
fn callsign_field(callsign6: &str) -> Result<u32, EncodeError> {
    let chars: Vec<char> = callsign6.chars().collect();
    if chars.len() != 6 {
        return Err(EncodeError::InvalidCallsign);
    }

    let mut n = u32::from(code(chars[0])?);
    n = n * 36 + u32::from(code(chars[1])?);
    n = n * 10 + u32::from(code(chars[2])?);
    for &ch in &chars[3..6] {
        n = (n * 27).wrapping_add(u32::from(code(ch)?).wrapping_sub(10));
    }
    Ok(n)
}

/// Type 3 packs the six character locator into the call sign field,
/// reordered as [1,2,3,4,5,0] so the letter/digit pattern matches the
/// call sign grammar. The locator itself is taken as supplied; only
/// characters outside the codec alphabet are rejected.
fn locator6_field(locator6: &str) -> Result<u32, EncodeError> {
    let chars: Vec<char> = locator6.chars().collect();
    if chars.len() != 6 {
        return Err(EncodeError::InvalidLocator);
    }

    let mut n = u32::from(code(chars[1])?);
    n = n * 36 + u32::from(code(chars[2])?);
    n = n * 10 + u32::from(code(chars[3])?);
    for ch in [chars[4], chars[5], chars[0]] {
        n = (n * 27).wrapping_add(u32::from(code(ch)?).wrapping_sub(10));
    }
    Ok(n)
}

/// Type 1 locator and power field. The locator is guaranteed valid by
/// normalization, so this packs infallibly.
fn locator_power_field(locator4: &str, power_dbm: u8) -> u32 {
    let loc = locator4.as_bytes();
    let m = (179
        - 10 * (i32::from(loc[0]) - i32::from(b'A'))
        - (i32::from(loc[2]) - i32::from(b'0')))
        * 180
        + 10 * (i32::from(loc[1]) - i32::from(b'A'))
        + (i32::from(loc[3]) - i32::from(b'0'));
    (m * 128 + i32::from(power_dbm) + 64) as u32
}

/// Type 2 locator/power slot: either a suffix code or a three character
/// base-37 prefix. The prefix range folds at 32768 and the power offset
/// (+65, +66 or +66 with the suffix constant) tells the decoder which
/// encoding was used.
fn prefix_suffix_field(augmentation: &Augmentation, power_dbm: u8) -> Result<u32, EncodeError> {
    match augmentation {
        Augmentation::Suffix(suffix) => {
            if *suffix > 81 {
                return Err(EncodeError::InvalidSuffix);
            }
            Ok((27232 + u32::from(*suffix)) * 128 + u32::from(power_dbm) + 2 + 64)
        }
        Augmentation::Prefix(prefix) => {
            if prefix.is_empty() || prefix.len() > 3 {
                return Err(EncodeError::InvalidPrefix);
            }
            let padded = format!("{: >3}", prefix);
            let mut m = 0u32;
            for ch in padded.chars() {
                if !(ch == ' ' || ch.is_ascii_digit() || ch.is_ascii_uppercase()) {
                    return Err(EncodeError::InvalidCharacter { ch });
                }
                m = m * 37 + u32::from(encode_char(ch));
            }
            if m > 32767 {
                Ok((m - 32768) * 128 + u32::from(power_dbm) + 66)
            } else {
                Ok(m * 128 + u32::from(power_dbm) + 65)
            }
        }
    }
}

/// Type 3 power slot carries the 16 bit call sign hash. Arithmetic wraps
/// like the reference's unsigned 32 bit math.
fn hash_power_field(
    raw_callsign: &str,
    augmentation: &Augmentation,
    power_dbm: u8,
) -> Result<u32, EncodeError> {
    let hash = callsign_hash(raw_callsign, augmentation)?;
    Ok((128 * u32::from(hash))
        .wrapping_sub(u32::from(power_dbm))
        .wrapping_sub(1)
        .wrapping_add(64))
}
