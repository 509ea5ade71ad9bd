//! sipp-transform - Resampling for sipp
//!
//! Box-filter downscaling and fixed-size thumbnails. Output is always 8-bit
//! grayscale.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{THUMB_SIDE, scale_down, thumbnail};
