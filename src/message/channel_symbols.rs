//! Final tone symbols: interleaved parity bits merged with the sync
//! vector. Each symbol carries one sync bit and one FEC bit, giving the
//! quaternary tone indices 0-3 handed to the transmitter driver.

use super::constants::{SYMBOL_COUNT, SYNC_VECTOR};

pub fn channel_symbols(parity: &[u8; SYMBOL_COUNT]) -> [u8; SYMBOL_COUNT] {
    let mut symbols = [0u8; SYMBOL_COUNT];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        *symbol = SYNC_VECTOR[i] + 2 * parity[i];
    }
    symbols
}
