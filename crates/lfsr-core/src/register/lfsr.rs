// crates/lfsr-core/src/register/lfsr.rs

use crate::error::{LfsrError, Result};
use crate::register::step::Register;

/// A register plus its feedback mask. The caller-facing owner of the state
/// for code that prefers an iterator over threading `state` by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lfsr<R: Register> {
    mask: R,
    state: R,
}

impl<R: Register> Lfsr<R> {
    /// Mask must carry the top bit. Seed may be anything; a zero seed stalls.
    pub fn new(mask: R, seed: R) -> Result<Self> {
        if !mask.has_msb() {
            return Err(LfsrError::Validation(format!(
                "mask 0x{:x} must have its top bit set",
                mask
            )));
        }
        Ok(Self { mask, state: seed })
    }

    /// Advance one step and return the new state.
    #[inline]
    pub fn next_state(&mut self) -> R {
        self.state = self.state.step(self.mask);
        self.state
    }
}

impl<R: Register> Iterator for Lfsr<R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        Some(self.next_state())
    }
}
