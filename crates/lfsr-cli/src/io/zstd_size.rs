use std::io::Cursor;

use lfsr_core::score::Compressor;
use lfsr_core::LfsrError;

/// zstd output length as the compressibility score.
#[derive(Clone, Copy, Debug)]
pub struct ZstdSize {
    pub level: i32,
}

impl ZstdSize {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

pub fn zstd_size(bytes: &[u8], level: i32) -> std::io::Result<usize> {
    // Deterministic given bytes+level.
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}

impl Compressor for ZstdSize {
    fn compressed_len(&mut self, bytes: &[u8]) -> lfsr_core::Result<usize> {
        zstd_size(bytes, self.level).map_err(|e| LfsrError::Compress(format!("zstd: {e}")))
    }
}
