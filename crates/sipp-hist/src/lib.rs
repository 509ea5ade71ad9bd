//! sipp-hist - Joint gradient histograms
//!
//! This crate bins a [`GradientField`](sipp_filter::GradientField) into a
//! 2-D histogram over the (re, im) plane and renders it:
//!
//! - [`HistogramStorage`] - dense or sparse joint histogram, chosen by
//!   [`select_storage`]
//! - [`DistinctValueTable`] - the distinct nonzero bin counts and how many
//!   bins hold each
//! - [`HistogramGrid`] - bin geometry
//! - [`BinSource`] and [`render_levels`] - shared 8-bit rendering with
//!   integer-factor box downscaling
//! - [`gray_histogram`] - plain 1-D gray-level histogram
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use sipp_core::GrayImage;
//! use sipp_filter::GradientField;
//! use sipp_hist::{HistogramOptions, HistogramStorage, StorageKind};
//!
//! let src = GrayImage::from_bytes(3, 3, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//! let field = Arc::new(GradientField::from_source(&src));
//! let hist = HistogramStorage::build(field, &HistogramOptions::default()).unwrap();
//! assert_eq!(hist.kind(), StorageKind::Dense);
//! assert_eq!(hist.max_bin_count(), 4);
//! ```

pub mod bins;
mod error;
pub mod gray;
pub mod grid;
pub mod options;
pub mod render;
pub mod storage;

pub use bins::{BinPair, DistinctValueTable};
pub use error::{HistError, HistResult};
pub use gray::gray_histogram;
pub use grid::{HistogramGrid, MAX_EXCURSION};
pub use options::HistogramOptions;
pub use render::{BinSource, Quantize, downscale_factor, render_levels};
pub use storage::{HistogramStorage, SPARSE_ENTRY_WORDS, StorageKind, select_storage};
