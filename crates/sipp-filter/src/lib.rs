//! sipp-filter - Gradient fields
//!
//! This crate turns a grayscale image into a complex-valued
//! finite-difference gradient:
//!
//! - [`GradientKernel`] - 2x2 complex kernel, default `[[-1, i], [-i, 1]]`
//! - [`GradientField`] - the gradient image with its extrema and maximum
//!   modulus

mod error;
pub mod gradient;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use gradient::GradientField;
pub use kernel::GradientKernel;
