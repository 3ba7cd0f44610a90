use bitvec::prelude::*;

pub trait PackBitvecFieldType {
    fn pack_into_bitvec(&self, bits: &mut BitVec<u8, Msb0>, width: usize);
}

impl PackBitvecFieldType for u32 {
    fn pack_into_bitvec(&self, bits: &mut BitVec<u8, Msb0>, width: usize) {
        assert!(width > 0, "Width must be at least 1");
        assert!(width <= 32, "Width exceeds the bit size of the given type");

        for i in (0..width).rev() {
            bits.push((*self >> i) & 1 != 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_msb_first() {
        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        0b1011u32.pack_into_bitvec(&mut bits, 4);
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.as_bitslice(), bits![1, 0, 1, 1]);
    }

    #[test]
    fn truncates_to_requested_width() {
        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        0xFFFF_FFFFu32.pack_into_bitvec(&mut bits, 3);
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn consecutive_fields_share_raw_bytes() {
        let mut bits: BitVec<u8, Msb0> = BitVec::new();
        0xAu32.pack_into_bitvec(&mut bits, 4);
        0x5u32.pack_into_bitvec(&mut bits, 4);
        assert_eq!(bits.as_raw_slice(), &[0xA5]);
    }
}
