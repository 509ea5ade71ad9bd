//! Error types for sipp-hist
//!
//! Out-of-range queries are ordinary errors. `MissingBin` and
//! `SubstituteLengthMismatch` mean the histogram and its distinct-value
//! table disagree, or a caller passed a substitute table built for another
//! histogram; neither is recovered from inside the library.

use thiserror::Error;

/// Errors that can occur while building or querying histograms
#[derive(Debug, Error)]
pub enum HistError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sipp_core::Error),

    /// Gradient field error
    #[error("filter error: {0}")]
    Filter(#[from] sipp_filter::FilterError),

    /// Pixel outside the gradient field
    #[error("gradient pixel ({x}, {y}) outside {width}x{height} field")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A nonzero bin count has no entry in the distinct-value table
    #[error("no distinct-value slot for bin count {value}")]
    MissingBin { value: u32 },

    /// Substitute table doesn't match the distinct-value table
    #[error("substitute table has {actual} entries, expected {expected}")]
    SubstituteLengthMismatch { expected: usize, actual: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for histogram operations
pub type HistResult<T> = Result<T, HistError>;
