// crates/lfsr-core/src/keystream/trace.rs

use crate::keystream::BitOrder;
use crate::register::{parity, step16};

/// Recorded register states for one (seed, mask) pair, eight per output byte.
///
/// With a fixed seed the register walk does not depend on the tap selector,
/// so a trace built once per mask serves every tap of the inner loop.
#[derive(Clone, Debug, Default)]
pub struct RegisterTrace {
    states: Vec<u16>,
}

impl RegisterTrace {
    pub fn new(seed: u16, mask: u16, bytes: usize) -> Self {
        let mut t = Self {
            states: Vec::with_capacity(bytes * 8),
        };
        t.rebuild(seed, mask, bytes);
        t
    }

    /// Re-record in place, keeping the allocation.
    pub fn rebuild(&mut self, seed: u16, mask: u16, bytes: usize) {
        self.states.clear();
        let mut s = seed;
        for _ in 0..bytes * 8 {
            s = step16(s, mask);
            self.states.push(s);
        }
    }

    /// Number of keystream bytes the trace covers.
    pub fn len_bytes(&self) -> usize {
        self.states.len() / 8
    }

    /// `out[k] = sample[k] ^ keystream_byte(k)` for the given tap.
    /// Covers `min(sample.len(), out.len(), len_bytes())` bytes.
    pub fn candidate_into(&self, sample: &[u8], tap: u16, order: BitOrder, out: &mut [u8]) {
        for ((o, &s), chunk) in out.iter_mut().zip(sample).zip(self.states.chunks_exact(8)) {
            let mut byte = 0u8;
            for (l, &st) in chunk.iter().enumerate() {
                byte |= order.place(parity(st & tap), l as u32);
            }
            *o = s ^ byte;
        }
    }
}
