use thiserror::Error;

/// Everything that can go wrong reading or writing a PNG.
#[derive(Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Colour type or bit depth outside 8/16-bit grayscale
    #[error("not an 8- or 16-bit grayscale image: {0}")]
    UnsupportedFormat(String),

    #[error("malformed image: {0}")]
    InvalidData(String),

    #[error("png decoding failed: {0}")]
    DecodeError(String),

    #[error("png encoding failed: {0}")]
    EncodeError(String),

    #[error(transparent)]
    Core(#[from] sipp_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<IoError> for sipp_core::Error {
    fn from(err: IoError) -> Self {
        match err {
            IoError::Io(e) => sipp_core::Error::Io(e),
            IoError::Core(e) => e,
            other => sipp_core::Error::EncodeError(other.to_string()),
        }
    }
}
