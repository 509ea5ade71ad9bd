//! sipp - Gradient joint-histogram and delentropy analysis
//!
//! sipp measures the delentropy of a grayscale image: the entropy of the
//! joint histogram of its finite-difference gradient. Alongside the single
//! number it can render the intermediate stages:
//!
//! - Thumbnail of the source
//! - Real and imaginary gradient planes
//! - Joint histogram, plain and center-suppressed
//! - Per-bin and per-pixel delentropy
//! - Per-pixel conventional entropy
//!
//! # Example
//!
//! ```
//! use sipp::{AnalysisOptions, GrayImage, analyze};
//!
//! let src = GrayImage::from_bytes(2, 2, vec![1, 2, 5, 6]).unwrap();
//! let mut sink: Vec<(String, GrayImage)> = Vec::new();
//! let report = analyze(&src, &AnalysisOptions::default(), &mut sink).unwrap();
//! assert_eq!(report.delentropy, 0.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use sipp_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use sipp_entropy as entropy;
pub use sipp_filter as filter;
pub use sipp_hist as hist;
pub use sipp_io as io;
pub use sipp_transform as transform;

pub mod analysis;
mod error;

pub use analysis::{AnalysisOptions, AnalysisReport, Renderings, analyze};
pub use error::{AnalysisError, AnalysisResult};
