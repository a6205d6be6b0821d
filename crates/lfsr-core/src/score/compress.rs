use crate::error::Result;

/// Generic lossless byte compressor, used only for its output length.
///
/// Lower is "more structured". The search asks for it only when a
/// candidate's entropy is at least as good as the current record.
pub trait Compressor {
    fn compressed_len(&mut self, bytes: &[u8]) -> Result<usize>;
}

impl<F> Compressor for F
where
    F: FnMut(&[u8]) -> Result<usize>,
{
    fn compressed_len(&mut self, bytes: &[u8]) -> Result<usize> {
        self(bytes)
    }
}
