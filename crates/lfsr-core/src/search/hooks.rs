use crate::search::record::{Candidate, Improvement};

/// Early-exit hook for the two-level enumeration. Skipped pairs are neither
/// scored nor counted.
pub trait Prune {
    fn skip_mask(&self, _mask: u16) -> bool {
        false
    }

    fn skip_pair(&self, _mask: u16, _tap: u16) -> bool {
        false
    }
}

/// Exhaustive search.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrune;

impl Prune for NoPrune {}

/// A plain `Fn(mask, tap) -> skip` works as a pair filter.
impl<F> Prune for F
where
    F: Fn(u16, u16) -> bool,
{
    fn skip_pair(&self, mask: u16, tap: u16) -> bool {
        self(mask, tap)
    }
}

/// Receives search events as they happen.
pub trait SearchObserver {
    /// A new best-so-far record.
    fn on_improvement(&mut self, _imp: &Improvement) {}

    /// Every scored candidate; only called when `wants_candidates` is true.
    fn on_candidate(&mut self, _cand: &Candidate, _entropy: f64) {}

    fn wants_candidates(&self) -> bool {
        false
    }

    /// All taps of `mask` are done; `evaluated` is the running total.
    fn on_mask_done(&mut self, _mask: u16, _evaluated: u64) {}
}

impl SearchObserver for () {}
