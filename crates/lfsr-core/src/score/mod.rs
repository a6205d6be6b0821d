pub mod compress;
pub mod entropy;

pub use compress::Compressor;
pub use entropy::{entropy, ByteHistogram};
