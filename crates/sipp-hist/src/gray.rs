//! One-dimensional gray-level histograms

use crate::{HistError, HistResult};
use sipp_core::PixelSource;

/// Histogram of pixel values, one bin per `factor` gray levels.
///
/// The histogram has `depth.histogram_size() / factor` bins (rounded up):
/// 256 for an 8-bit source and 65536 for a 16-bit source with `factor` 1.
///
/// # Errors
///
/// Returns [`HistError::InvalidParameters`] if `factor` is 0.
pub fn gray_histogram<S: PixelSource + ?Sized>(src: &S, factor: u32) -> HistResult<Vec<u32>> {
    if factor == 0 {
        return Err(HistError::InvalidParameters(
            "histogram factor must be >= 1".to_string(),
        ));
    }
    let size = src.depth().histogram_size().div_ceil(factor as usize);
    let mut hist = vec![0u32; size];
    for y in 0..src.height() {
        for x in 0..src.width() {
            let v = src.int_value(x, y).max(0) as usize / factor as usize;
            hist[v.min(size - 1)] += 1;
        }
    }
    Ok(hist)
}
