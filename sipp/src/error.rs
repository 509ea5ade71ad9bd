//! Error type for the analysis pipeline

use thiserror::Error;

/// Errors raised by [`analyze`](crate::analyze)
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Core library error, including sink write failures
    #[error("core error: {0}")]
    Core(#[from] sipp_core::Error),

    /// Thumbnail error
    #[error("thumbnail error: {0}")]
    Transform(#[from] sipp_transform::TransformError),

    /// Histogram error
    #[error("histogram error: {0}")]
    Hist(#[from] sipp_hist::HistError),

    /// Entropy error
    #[error("entropy error: {0}")]
    Entropy(#[from] sipp_entropy::EntropyError),
}

/// Result type for the analysis pipeline
pub type AnalysisResult<T> = Result<T, AnalysisError>;
