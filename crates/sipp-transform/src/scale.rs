//! Image downscaling
//!
//! A separable box filter with fractional edge weights: every output pixel
//! averages exactly the span of source pixels it covers, with the partially
//! covered pixels at either end weighted by the covered fraction. Rows are
//! filtered first into an 8-bit intermediate, then columns.
//!
//! | function | purpose |
//! |---|---|
//! | `scale_down` | fit a source into a destination, aspect preserved |
//! | `thumbnail` | square 150x150 preview |

use crate::{TransformError, TransformResult};
use sipp_core::{GrayDepth, GrayImage, PixelSource};

/// Thumbnails are square, this many pixels on a side.
pub const THUMB_SIDE: u32 = 150;

/// Smallest pixel fraction worth a filter tap. Also used instead of exact
/// floating-point equality when splitting spans.
const MIN_FRAC: f64 = 1.0 / 256.0;

/// Taps for one output pixel
#[derive(Debug, Clone)]
struct Filter {
    /// First source index
    idx: usize,
    /// One weight per source pixel starting at `idx`
    weights: Vec<f64>,
}

/// Scale a source down into a `dst_width x dst_height` 8-bit image.
///
/// The aspect ratio is preserved: the result is centered and the unused
/// border is left black. Sixteen-bit sources are reduced to 8 bits during
/// the horizontal pass. A source that already fits is copied to the center
/// unscaled, and an empty source yields an all-black image.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if either destination
/// dimension is 0.
pub fn scale_down<S: PixelSource + ?Sized>(
    src: &S,
    dst_width: u32,
    dst_height: u32,
) -> TransformResult<GrayImage> {
    if dst_width == 0 || dst_height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "destination must not be empty, got {}x{}",
            dst_width, dst_height
        )));
    }

    let mut dst = GrayImage::new(dst_width, dst_height, GrayDepth::Bit8);
    let src_width = src.width();
    let src_height = src.height();
    if src_width == 0 || src_height == 0 {
        return Ok(dst);
    }

    let depth_scale = match src.depth() {
        GrayDepth::Bit8 => 1.0,
        GrayDepth::Bit16 => 1.0 / 256.0,
    };

    if src_width <= dst_width && src_height <= dst_height {
        let hoff = (dst_width - src_width) / 2;
        let voff = (dst_height - src_height) / 2;
        for y in 0..src_height {
            for x in 0..src_width {
                let val = to_u8(src.value(x, y) * depth_scale);
                dst.set_pixel(x + hoff, y + voff, val)?;
            }
        }
        return Ok(dst);
    }

    let src_ar = src_width as f64 / src_height as f64;
    let dst_ar = dst_width as f64 / dst_height as f64;
    let (scale, out_width, out_height) = if src_ar < dst_ar {
        let scale = src_height as f64 / dst_height as f64;
        (scale, (src_width as f64 / scale) as u32, dst_height)
    } else {
        let scale = src_width as f64 / dst_width as f64;
        (scale, dst_width, (src_height as f64 / scale) as u32)
    };
    let out_width = out_width.min(dst_width);
    let out_height = out_height.min(dst_height);
    if out_width == 0 || out_height == 0 {
        return Ok(dst);
    }

    // One of these is 0.
    let hoff = (dst_width - out_width) / 2;
    let voff = (dst_height - out_height) / 2;

    let hfilter = precompute_filter(scale, out_width as usize, src_width as usize, depth_scale);
    let ow = out_width as usize;
    let mut intermediate = vec![0u8; ow * src_height as usize];
    for y in 0..src_height {
        let row = &mut intermediate[y as usize * ow..(y as usize + 1) * ow];
        for (out, f) in row.iter_mut().zip(&hfilter) {
            let val: f64 = f
                .weights
                .iter()
                .enumerate()
                .map(|(i, w)| src.value((f.idx + i) as u32, y) * w)
                .sum();
            *out = to_u8(val) as u8;
        }
    }

    let vfilter = precompute_filter(scale, out_height as usize, src_height as usize, 1.0);
    for x in 0..out_width {
        for (y, f) in vfilter.iter().enumerate() {
            let val: f64 = f
                .weights
                .iter()
                .enumerate()
                .map(|(i, w)| f64::from(intermediate[(f.idx + i) * ow + x as usize]) * w)
                .sum();
            dst.set_pixel(x + hoff, y as u32 + voff, to_u8(val))?;
        }
    }

    Ok(dst)
}

/// Square 150x150 8-bit thumbnail, padded with black if the source isn't
/// square.
pub fn thumbnail<S: PixelSource + ?Sized>(src: &S) -> TransformResult<GrayImage> {
    scale_down(src, THUMB_SIDE, THUMB_SIDE)
}

/// Round to nearest and clamp to the 8-bit range.
fn to_u8(val: f64) -> u32 {
    (val + 0.5).floor().clamp(0.0, 255.0) as u32
}

/// One filter per output pixel. `sample_scale` folds a depth reduction into
/// the weights.
fn precompute_filter(
    scale: f64,
    out_size: usize,
    src_size: usize,
    sample_scale: f64,
) -> Vec<Filter> {
    (0..out_size)
        .map(|i| {
            let pos = i as f64 * scale;
            let mut idx = pos.floor() as usize;
            let mut first = 1.0 - pos.fract();
            let mut weights = Vec::new();
            if first < MIN_FRAC {
                idx += 1;
                first = 0.0;
            } else {
                weights.push(first / scale * sample_scale);
            }

            let rest = scale - first;
            let whole = rest.floor().max(0.0) as usize;
            let frac = rest - rest.floor();
            weights.extend(std::iter::repeat_n(1.0 / scale * sample_scale, whole));
            if frac >= MIN_FRAC {
                weights.push(frac / scale * sample_scale);
            }

            // Rounding can push the last tap past the edge.
            let avail = src_size.saturating_sub(idx);
            weights.truncate(avail);
            Filter { idx, weights }
        })
        .collect()
}
