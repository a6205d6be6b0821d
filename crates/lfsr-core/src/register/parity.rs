/// XOR-fold of all bits of `x`: 1 when the population count is odd.
#[inline]
pub fn parity(x: u16) -> u8 {
    (x.count_ones() & 1) as u8
}

#[cfg(test)]
mod tests {
    use super::parity;
    use proptest::prelude::*;

    fn popcount_reference(mut x: u16) -> u32 {
        let mut n = 0;
        while x != 0 {
            n += (x & 1) as u32;
            x >>= 1;
        }
        n
    }

    #[test]
    fn small_values() {
        assert_eq!(parity(0), 0);
        assert_eq!(parity(1), 1);
        assert_eq!(parity(3), 0);
        assert_eq!(parity(7), 1);
        assert_eq!(parity(0xFFFF), 0);
        assert_eq!(parity(0x8000), 1);
    }

    proptest! {
        #[test]
        fn matches_reference_popcount(x in any::<u16>()) {
            prop_assert_eq!(parity(x) == 1, popcount_reference(x) % 2 == 1);
        }

        #[test]
        fn parity_of_xor_is_xor_of_parity(a in any::<u16>(), b in any::<u16>()) {
            prop_assert_eq!(parity(a ^ b), parity(a) ^ parity(b));
        }
    }
}
