//! 16-bit call sign hash for type 3 messages.
//!
//! The hash is computed over a composite string: `call/suffix` when a
//! suffix is in use, `prefix/call` otherwise. Receivers resolve type 3
//! messages by computing the same hash over a call sign database, so the
//! mixing function (a Jenkins lookup3 variant) must stay bit exact with
//! the reference implementation.

use tracing::trace;

use super::encode_error::EncodeError;
use super::Augmentation;

/// Hash a call sign together with its prefix or suffix, masked to 16 bits.
///
/// Composite strings outside the supported 3 to 10 character range are
/// rejected; the reference leaves their behavior unspecified.
pub fn callsign_hash(callsign: &str, augmentation: &Augmentation) -> Result<u16, EncodeError> {
    let composite = composite_string(callsign, augmentation)?;
    let bytes = composite.as_bytes();
    let length = bytes.len();
    if !(3..=10).contains(&length) {
        return Err(EncodeError::InvalidCallsign);
    }

    // the tail word is masked down to the bytes the string actually has
    let mut padded = [0u8; 12];
    padded[..length].copy_from_slice(bytes);
    let k0 = u32::from_le_bytes([padded[0], padded[1], padded[2], padded[3]]);
    let k1 = u32::from_le_bytes([padded[4], padded[5], padded[6], padded[7]]);
    let k2 = u32::from_le_bytes([padded[8], padded[9], padded[10], padded[11]]);

    let seed = 0xdead_beef_u32
        .wrapping_add(length as u32)
        .wrapping_add(146);
    let (mut a, mut b, mut c) = (seed, seed, seed);

    match length {
        10 => {
            c = c.wrapping_add(k2 & 0xffff);
            b = b.wrapping_add(k1);
            a = a.wrapping_add(k0);
        }
        9 => {
            c = c.wrapping_add(k2 & 0xff);
            b = b.wrapping_add(k1);
            a = a.wrapping_add(k0);
        }
        8 => {
            b = b.wrapping_add(k1);
            a = a.wrapping_add(k0);
        }
        7 => {
            b = b.wrapping_add(k1 & 0xff_ffff);
            a = a.wrapping_add(k0);
        }
        6 => {
            b = b.wrapping_add(k1 & 0xffff);
            a = a.wrapping_add(k0);
        }
        5 => {
            b = b.wrapping_add(k1 & 0xff);
            a = a.wrapping_add(k0);
        }
        4 => {
            a = a.wrapping_add(k0);
        }
        _ => {
            a = a.wrapping_add(k0 & 0xff_ffff);
        }
    }

    // final mixing schedule: rotate, xor, subtract
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));

    let hash = (c & 0xffff) as u16;
    trace!(%composite, hash, "hashed call sign");
    Ok(hash)
}

fn composite_string(callsign: &str, augmentation: &Augmentation) -> Result<String, EncodeError> {
    match augmentation {
        Augmentation::Suffix(code) => Ok(format!("{}/{}", callsign, suffix_text(*code)?)),
        Augmentation::Prefix(prefix) => {
            if prefix.is_empty() || prefix.len() > 3 {
                return Err(EncodeError::InvalidPrefix);
            }
            Ok(format!("{}/{}", prefix, callsign))
        }
    }
}

/// Suffix codes 0-35 map to a single digit or letter, 36-81 to the two
/// digit numbers 00-45.
fn suffix_text(code: u8) -> Result<String, EncodeError> {
    match code {
        0..=9 => Ok(char::from(b'0' + code).to_string()),
        10..=35 => Ok(char::from(b'A' + code - 10).to_string()),
        36..=81 => Ok(format!("{:02}", code - 36)),
        _ => Err(EncodeError::InvalidSuffix),
    }
}
