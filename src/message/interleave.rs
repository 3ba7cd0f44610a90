//! Bit reversal interleaver.
//!
//! Parity bits are scattered across the transmission by bit-reversing
//! their 8 bit index, which spreads burst errors before the decoder's
//! Viterbi pass. Only reversed indices under 162 are valid destinations,
//! so the source index has to run over the whole 0..255 range.

use super::constants::SYMBOL_COUNT;

pub fn interleave(parity: &[u8; SYMBOL_COUNT]) -> [u8; SYMBOL_COUNT] {
    let mut interleaved = [0u8; SYMBOL_COUNT];
    let mut next = 0;

    for j in 0u8..255 {
        let rev = j.reverse_bits() as usize;
        if rev < SYMBOL_COUNT {
            interleaved[rev] = parity[next];
            next += 1;
        }
        if next >= SYMBOL_COUNT {
            break;
        }
    }

    interleaved
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Destination index for each input bit, in emission order.
    fn permutation_table() -> Vec<usize> {
        (0u8..255)
            .map(|j| j.reverse_bits() as usize)
            .filter(|&rev| rev < SYMBOL_COUNT)
            .collect()
    }

    #[test]
    fn map_is_a_permutation() {
        let mut destinations = permutation_table();
        assert_eq!(destinations.len(), SYMBOL_COUNT);
        destinations.sort_unstable();
        for (i, dest) in destinations.iter().enumerate() {
            assert_eq!(i, *dest);
        }
    }

    #[test]
    fn inverse_table_recovers_original_order() {
        let mut input = [0u8; SYMBOL_COUNT];
        for (i, value) in input.iter_mut().enumerate() {
            *value = i as u8;
        }

        let interleaved = interleave(&input);

        // invert via the explicit table rather than re-running the forward pass
        let table = permutation_table();
        let mut inverse = [0usize; SYMBOL_COUNT];
        for (source, &dest) in table.iter().enumerate() {
            inverse[dest] = source;
        }

        let mut recovered = [0u8; SYMBOL_COUNT];
        for (dest, &value) in interleaved.iter().enumerate() {
            recovered[inverse[dest]] = value;
        }
        assert_eq!(recovered, input);
    }

    #[test]
    fn multiset_of_bits_is_preserved() {
        let mut bits = [0u8; SYMBOL_COUNT];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (i % 2) as u8;
        }
        let interleaved = interleave(&bits);
        let ones_before: usize = bits.iter().map(|&b| usize::from(b)).sum();
        let ones_after: usize = interleaved.iter().map(|&b| usize::from(b)).sum();
        assert_eq!(ones_before, ones_after);
    }

    #[test]
    fn first_input_bit_lands_at_index_zero() {
        // index 0 bit-reverses to 0
        let mut bits = [0u8; SYMBOL_COUNT];
        bits[0] = 1;
        assert_eq!(interleave(&bits)[0], 1);
    }

    #[test]
    fn second_input_bit_lands_at_index_128() {
        // index 1 bit-reverses to 128
        let mut bits = [0u8; SYMBOL_COUNT];
        bits[1] = 1;
        assert_eq!(interleave(&bits)[128], 1);
    }
}
