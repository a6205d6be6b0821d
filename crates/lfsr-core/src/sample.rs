// crates/lfsr-core/src/sample.rs

use crate::error::{LfsrError, Result};

/// Bits collected from the remote generator before the packed sample is
/// written.
pub const DEFAULT_MIN_BITS: usize = 8 * 1024;

/// Leading `len` bytes of `sample`.
pub fn window(sample: &[u8], len: usize) -> Result<&[u8]> {
    sample.get(..len).ok_or_else(|| {
        LfsrError::Validation(format!(
            "sample too short: need {} bytes, got {}",
            len,
            sample.len()
        ))
    })
}

/// Pack ASCII bit characters, 8 per byte, MSB-first. `'1'` is a one bit and
/// any other byte is a zero bit. A trailing group shorter than 8 is packed
/// without padding, so its bits sit at the low end of the last byte.
pub fn pack_ascii_bits(chars: &[u8]) -> Vec<u8> {
    chars
        .chunks(8)
        .map(|group| {
            group
                .iter()
                .fold(0u8, |b, &c| (b << 1) | u8::from(c == b'1'))
        })
        .collect()
}

/// Accumulates response bodies from the bit service until enough bits are in.
#[derive(Clone, Debug, Default)]
pub struct BitCollector {
    chars: Vec<u8>,
}

impl BitCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, body: &[u8]) {
        self.chars.extend_from_slice(body);
    }

    pub fn bits(&self) -> usize {
        self.chars.len()
    }

    pub fn has_at_least(&self, min_bits: usize) -> bool {
        self.chars.len() >= min_bits
    }

    pub fn finish(self) -> Vec<u8> {
        pack_ascii_bits(&self.chars)
    }
}
