use thiserror::Error;

pub type Result<T> = std::result::Result<T, LfsrError>;

#[derive(Debug, Error)]
pub enum LfsrError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("compressor error: {0}")]
    Compress(String),
}
