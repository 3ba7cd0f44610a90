//! Rate 1/2, constraint length 32 convolutional encoder.
//!
//! Both shift registers consume the same input bit stream, MSB first
//! across the 88 payload bits. Each input bit yields two parity bits, one
//! per feedback polynomial, until exactly 162 have been emitted.

use super::constants::{FEC_TAPS_0, FEC_TAPS_1, PAYLOAD_BYTES, SYMBOL_COUNT};

pub fn convolve(payload: &[u8; PAYLOAD_BYTES]) -> [u8; SYMBOL_COUNT] {
    let mut parity = [0u8; SYMBOL_COUNT];
    let mut reg_0: u32 = 0;
    let mut reg_1: u32 = 0;
    let mut bit_count = 0;

    'payload: for byte in payload {
        for j in 0..8 {
            let input_bit = u32::from((byte >> (7 - j)) & 1);
            reg_0 = (reg_0 << 1) | input_bit;
            reg_1 = (reg_1 << 1) | input_bit;

            parity[bit_count] = ((reg_0 & FEC_TAPS_0).count_ones() & 1) as u8;
            parity[bit_count + 1] = ((reg_1 & FEC_TAPS_1).count_ones() & 1) as u8;
            bit_count += 2;

            // the last byte is only partially consumed
            if bit_count >= SYMBOL_COUNT {
                break 'payload;
            }
        }
    }

    parity
}
