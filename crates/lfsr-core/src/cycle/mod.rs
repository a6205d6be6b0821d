// crates/lfsr-core/src/cycle/mod.rs
//
// Full-cycle walk of the 8-bit register for every MSB-set mask. Diagnostic
// only; it never touches a sample.

use crate::error::{LfsrError, Result};
use crate::register::{Lfsr, Register};

/// Cycle found for one mask, starting from state 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskCycle {
    pub mask: u8,
    /// Steps until the register is back at 1.
    pub period: u32,
}

impl MaskCycle {
    /// Steps taken before the one that lands back on 1. This is the figure
    /// the early histogram runs printed per mask.
    pub fn steps_before_return(&self) -> u32 {
        self.period - 1
    }

    pub fn is_maximal(&self) -> bool {
        self.period == u8::max_period()
    }
}

/// Walk `mask` from state 1 until it returns to 1, bumping `visits` for
/// every state reached (the closing 1 included). Returns the period.
pub fn walk_mask(mask: u8, visits: &mut [u64; 256]) -> Result<u32> {
    let lfsr = Lfsr::<u8>::new(mask, 1)?;
    for (n, state) in (1..=256u32).zip(lfsr) {
        visits[state as usize] += 1;
        if state == 1 {
            return Ok(n);
        }
    }
    Err(LfsrError::Validation(format!(
        "mask 0x{mask:02x} did not return to state 1"
    )))
}

#[derive(Clone, Debug)]
pub struct CycleHistogram {
    pub cycles: Vec<MaskCycle>,
    visits: [u64; 256],
}

impl CycleHistogram {
    /// Walk masks `0x80..=0xFF`.
    pub fn walk_all() -> Result<Self> {
        let mut visits = [0u64; 256];
        let mut cycles = Vec::with_capacity(128);
        for mask in 0x80u8..=0xFF {
            let period = walk_mask(mask, &mut visits)?;
            log::debug!("mask 0x{mask:02x} period={period}");
            cycles.push(MaskCycle { mask, period });
        }
        Ok(Self { cycles, visits })
    }

    pub fn visits(&self) -> &[u64; 256] {
        &self.visits
    }

    pub fn total_visits(&self) -> u64 {
        self.visits.iter().sum()
    }

    /// (state, count) ordered by ascending count, ties by state.
    pub fn sorted_buckets(&self) -> Vec<(u8, u64)> {
        let mut rows: Vec<(u8, u64)> = (0u8..=255u8)
            .map(|s| (s, self.visits[s as usize]))
            .collect();
        rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    pub fn maximal_masks(&self) -> impl Iterator<Item = u8> + '_ {
        self.cycles.iter().filter(|c| c.is_maximal()).map(|c| c.mask)
    }
}
