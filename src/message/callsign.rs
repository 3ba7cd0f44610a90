//! Call sign normalization.
//!
//! The bit packer requires a fixed six character field whose third slot is
//! a digit. Raw call signs are repaired into that shape: one letter
//! prefixes are slid right behind a leading space, everything is
//! uppercased, and characters outside the WSPR alphabet become spaces.

/// Normalize a raw call sign into the fixed six character packing form.
///
/// The repair is deliberately tolerant: malformed input is space padded
/// and truncated rather than rejected, matching the protocol's handling
/// of partial station data. Anything the repair cannot mask is caught
/// later by the packer's character codec.
pub fn normalize_callsign(raw: &str) -> String {
    let raw_chars: Vec<char> = raw.chars().take(10).collect();

    let mut call = [' '; 6];
    for (slot, &ch) in call.iter_mut().zip(raw_chars.iter()) {
        *slot = ch;
    }

    // One letter prefix, e.g. "W1ABC": slide right so the digit lands in
    // the third slot and lead with a space. Drops the sixth character of
    // an already full call sign.
    if raw_chars.len() >= 3 && raw_chars[1].is_ascii_digit() && raw_chars[2].is_ascii_uppercase() {
        for i in (1..6).rev() {
            call[i] = call[i - 1];
        }
        call[0] = ' ';
    }

    for i in 0..6 {
        call[i] = call[i].to_ascii_uppercase();
        if !(call[i].is_ascii_digit() || call[i].is_ascii_uppercase()) {
            call[i] = ' ';
            // no dangling suffix letter after an invalid padding character
            if i == 4 {
                call[5] = ' ';
            }
        }
    }

    call.iter().collect()
}
