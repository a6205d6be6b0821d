// crates/lfsr-core/src/search/config.rs

use std::ops::Range;

use crate::keystream::BitOrder;

/// Exclusive end of a full 16-bit parameter range.
pub const FULL_RANGE_END: u32 = 1 << 16;

/// Analysis window used by every observed run.
pub const DEFAULT_WINDOW: usize = 1024;

/// Bit forced into every candidate feedback mask.
pub const MASK_MSB: u16 = 0x8000;

/// Initial register state for each candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Every candidate starts from state 1.
    #[default]
    One,
    /// The tap selector doubles as the seed. Tap 0 therefore stalls the
    /// register at 0, which only ever yields a zero keystream.
    Tap,
}

impl SeedPolicy {
    #[inline]
    pub fn seed_for(self, tap: u16) -> u16 {
        match self {
            SeedPolicy::One => 1,
            SeedPolicy::Tap => tap,
        }
    }
}

/// How candidates are ranked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScorePolicy {
    /// Minimum entropy only.
    #[default]
    Entropy,
    /// Minimum entropy, ties broken by minimum compressed size.
    EntropyThenCompressed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Bytes of the sample under analysis (taken from its start).
    pub window: usize,
    pub seed: SeedPolicy,
    pub score: ScorePolicy,
    pub bit_order: BitOrder,
    /// Low 15 bits of the feedback mask are `i` for `i` in this range.
    pub masks: Range<u32>,
    /// Tap selectors.
    pub taps: Range<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            seed: SeedPolicy::One,
            score: ScorePolicy::Entropy,
            bit_order: BitOrder::MsbFirst,
            masks: 0..FULL_RANGE_END,
            taps: 0..FULL_RANGE_END,
        }
    }
}

impl SearchConfig {
    /// Number of (mask, tap) pairs the enumeration visits before pruning.
    pub fn candidates(&self) -> u64 {
        self.masks.len() as u64 * self.taps.len() as u64
    }

    #[inline]
    pub fn mask_for(i: u32) -> u16 {
        MASK_MSB | (i as u16)
    }
}
