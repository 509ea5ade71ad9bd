use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("cannot read fixture {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: sipp_io::IoError,
    },

    #[error("cannot save {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: sipp_io::IoError,
    },

    #[error("check {index}: wanted {expected} (+/- {delta}), saw {actual}")]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    #[error("check {index}: images differ ({detail})")]
    ImageMismatch { index: usize, detail: String },

    #[error("check {index}: byte strings differ ({left} vs {right} bytes)")]
    BytesMismatch {
        index: usize,
        left: usize,
        right: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
