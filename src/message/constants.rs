/// Number of channel symbols in one WSPR transmission
pub const SYMBOL_COUNT: usize = 162;

/// Packed payload size in bytes: 50 significant bits, zero padded to 88
pub const PAYLOAD_BYTES: usize = 11;

/// Feedback taps for the first convolutional encoder shift register
pub const FEC_TAPS_0: u32 = 0xF2D0_5351;

/// Feedback taps for the second convolutional encoder shift register
pub const FEC_TAPS_1: u32 = 0xE461_3C47;

/// Pseudo random synchronization vector, one bit per channel symbol.
/// Receivers correlate against this pattern for time and frequency sync.
pub const SYNC_VECTOR: [u8; SYMBOL_COUNT] = [
    1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0,
    1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0,
    0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1,
    0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0,
    1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1,
    0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1,
    1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0,
];
