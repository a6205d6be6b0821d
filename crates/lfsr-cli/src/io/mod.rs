pub mod plot;
pub mod qrng;
pub mod sample_file;
pub mod zstd_size;
