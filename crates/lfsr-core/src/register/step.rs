// crates/lfsr-core/src/register/step.rs

/// One step of the right-shifting LFSR, 16-bit register.
///
/// `(state >> 1) ^ (mask & -(state & 1))`: when the bit shifted out is 1 the
/// whole tap mask is folded into the shifted state, otherwise nothing is.
/// State 0 is a fixed point.
#[inline]
pub fn step16(state: u16, mask: u16) -> u16 {
    (state >> 1) ^ (mask & 0u16.wrapping_sub(state & 1))
}

/// 8-bit variant of [`step16`]. Used by the cycle histogram walk.
#[inline]
pub fn step8(state: u8, mask: u8) -> u8 {
    (state >> 1) ^ (mask & 0u8.wrapping_sub(state & 1))
}

/// Fixed-width register word the LFSR can run on.
pub trait Register: Copy + Eq + Ord + std::fmt::Debug + std::fmt::LowerHex {
    const BITS: u32;
    /// Top bit of the word; every valid feedback mask carries it.
    const MSB: Self;

    fn step(self, mask: Self) -> Self;

    /// Number of non-zero states, i.e. the maximal period `2^BITS - 1`.
    fn max_period() -> u32 {
        (1u32 << Self::BITS) - 1
    }

    fn has_msb(self) -> bool;
}

impl Register for u8 {
    const BITS: u32 = 8;
    const MSB: Self = 0x80;

    #[inline]
    fn step(self, mask: Self) -> Self {
        step8(self, mask)
    }

    #[inline]
    fn has_msb(self) -> bool {
        self & Self::MSB != 0
    }
}

impl Register for u16 {
    const BITS: u32 = 16;
    const MSB: Self = 0x8000;

    #[inline]
    fn step(self, mask: Self) -> Self {
        step16(self, mask)
    }

    #[inline]
    fn has_msb(self) -> bool {
        self & Self::MSB != 0
    }
}
