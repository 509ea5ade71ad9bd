//! Sipp Core - Basic data structures for gradient and entropy analysis
//!
//! This crate provides the fundamental types used throughout the sipp
//! workspace:
//!
//! - [`GrayImage`] - 8-bit or 16-bit grayscale image
//! - [`PixelSource`] - read access to grayscale intensities
//! - [`ImageSink`] - receiver for labelled 8-bit renderings
//! - [`Complex`] - complex number used for gradient samples and kernels
//! - [`ComplexImage`] / [`Extrema`] - complex-valued image with its extrema

pub mod complex;
pub mod complex_image;
pub mod error;
pub mod gray;

pub use complex::Complex;
pub use complex_image::{ComplexImage, Extrema, ExtremaTracker};
pub use error::{Error, Result};
pub use gray::{GrayDepth, GrayImage, ImageSink, PixelSource};
