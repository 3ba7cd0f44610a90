pub mod bitvec_utils;
