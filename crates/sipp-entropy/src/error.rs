//! Error types for sipp-entropy

use thiserror::Error;

/// Errors that can occur while computing entropies
#[derive(Debug, Error)]
pub enum EntropyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sipp_core::Error),

    /// Histogram error
    #[error("histogram error: {0}")]
    Hist(#[from] sipp_hist::HistError),
}

/// Result type for entropy operations
pub type EntropyResult<T> = Result<T, EntropyError>;
