// crates/lfsr-core/src/keystream/mod.rs
//
// Parity keystream: every output bit is parity(state & tap) right after a
// register step, eight steps per byte, with the register threaded across the
// whole stream.

pub mod trace;

pub use trace::RegisterTrace;

use crate::error::{LfsrError, Result};
use crate::register::{parity, step16};

/// Where the first of the eight bits of a byte lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// First computed bit is bit 7.
    #[default]
    MsbFirst,
    /// First computed bit is bit 0 (the layout of the early exploratory runs).
    LsbFirst,
}

impl BitOrder {
    /// Place `bit` (0 or 1), the `l`-th bit computed for the byte (0..8).
    #[inline]
    pub fn place(self, bit: u8, l: u32) -> u8 {
        match self {
            BitOrder::MsbFirst => bit << (7 - l),
            BitOrder::LsbFirst => bit << l,
        }
    }
}

/// One keystream byte, MSB-first. Returns the byte and the register state to
/// continue from.
#[inline]
pub fn build_byte(state: u16, mask: u16, tap: u16) -> (u8, u16) {
    build_byte_ordered(state, mask, tap, BitOrder::MsbFirst)
}

#[inline]
pub fn build_byte_ordered(mut state: u16, mask: u16, tap: u16, order: BitOrder) -> (u8, u16) {
    let mut out = 0u8;
    for l in 0..8 {
        state = step16(state, mask);
        out |= order.place(parity(state & tap), l);
    }
    (out, state)
}

/// Fill `out` with keystream bytes starting from `seed`. The state is never
/// reset between bytes. Returns the final register state.
pub fn fill_keystream(seed: u16, mask: u16, tap: u16, order: BitOrder, out: &mut [u8]) -> u16 {
    let mut state = seed;
    for b in out.iter_mut() {
        let (byte, next) = build_byte_ordered(state, mask, tap, order);
        *b = byte;
        state = next;
    }
    state
}

/// `out[i] = sample[i] ^ keystream(seed, mask, tap)[i]` in a single pass.
pub fn fill_candidate(
    sample: &[u8],
    seed: u16,
    mask: u16,
    tap: u16,
    order: BitOrder,
    out: &mut [u8],
) {
    debug_assert_eq!(sample.len(), out.len());
    let mut state = seed;
    for (o, &s) in out.iter_mut().zip(sample) {
        let (byte, next) = build_byte_ordered(state, mask, tap, order);
        *o = s ^ byte;
        state = next;
    }
}

/// Byte-wise XOR of two equal-length buffers into `out`.
pub fn xor_into(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        return Err(LfsrError::Validation(format!(
            "xor length mismatch: a={} b={} out={}",
            a.len(),
            b.len(),
            out.len()
        )));
    }
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x ^ y;
    }
    Ok(())
}
