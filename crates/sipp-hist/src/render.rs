//! Rendering of histogram grids to 8-bit images
//!
//! Every rendering maps each bin to a gray level. Renderers only visit the
//! nonzero bins, through [`BinSource`], and fill the rest with the level for
//! an empty bin; a sparse histogram is therefore never expanded into a dense
//! grid.
//!
//! When either grid side exceeds the maximum render extent, both sides are
//! divided by the same integer factor `f = ceil(max(w, h) / extent)`. Each
//! output pixel is then the mean level of the `f x f` block of bins it
//! covers (edge blocks average only the bins they cover), quantized the same
//! way the full-size rendering would be.

use crate::HistResult;
use sipp_core::GrayImage;

/// Read access to the nonzero bins of a histogram grid
pub trait BinSource {
    /// Grid width and height in bins
    fn grid_size(&self) -> (u32, u32);

    /// Visit every nonzero bin as `(flat_index, count)` in row-major order.
    fn for_each_nonzero(&self, f: &mut dyn FnMut(usize, u32));

    /// Like [`for_each_nonzero`](Self::for_each_nonzero), but stops calling
    /// `f` after the first error and returns it.
    fn try_for_each_nonzero(
        &self,
        f: &mut dyn FnMut(usize, u32) -> HistResult<()>,
    ) -> HistResult<()> {
        let mut result = Ok(());
        self.for_each_nonzero(&mut |idx, count| {
            if result.is_ok() {
                result = f(idx, count);
            }
        });
        result
    }
}

/// How a gray level becomes a pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantize {
    /// Round half up
    Round,
    /// Truncate toward zero
    Truncate,
}

impl Quantize {
    /// Quantize a level to 0..=255.
    #[inline]
    pub fn apply(self, level: f64) -> u8 {
        let v = match self {
            Quantize::Round => (level + 0.5).floor(),
            Quantize::Truncate => level.trunc(),
        };
        v.clamp(0.0, 255.0) as u8
    }
}

/// Integer downscale factor for a `width x height` grid.
pub fn downscale_factor(width: u32, height: u32, max_extent: u32) -> u32 {
    width.max(height).div_ceil(max_extent.max(1)).max(1)
}

/// Render a grid by mapping each nonzero bin to a level.
///
/// `level` receives `(flat_index, count)` for every nonzero bin in
/// row-major order; empty bins get `zero_level`.
pub fn render_levels<B: BinSource + ?Sized>(
    source: &B,
    max_extent: u32,
    zero_level: f64,
    quantize: Quantize,
    level: &mut dyn FnMut(usize, u32) -> HistResult<f64>,
) -> HistResult<GrayImage> {
    let (width, height) = source.grid_size();
    let factor = downscale_factor(width, height, max_extent);
    let w = width as usize;

    if factor == 1 {
        let mut pixels = vec![quantize.apply(zero_level); w * height as usize];
        source.try_for_each_nonzero(&mut |idx, count| {
            pixels[idx] = quantize.apply(level(idx, count)?);
            Ok(())
        })?;
        return Ok(GrayImage::from_bytes(width, height, pixels)?);
    }

    let out_w = width.div_ceil(factor);
    let out_h = height.div_ceil(factor);
    tracing::trace!(width, height, factor, out_w, out_h, "downscaling rendering");

    let f = factor as usize;
    let ow = out_w as usize;
    let mut sums = vec![0.0f64; ow * out_h as usize];
    let mut hits = vec![0u64; ow * out_h as usize];
    source.try_for_each_nonzero(&mut |idx, count| {
        let o = (idx / w / f) * ow + (idx % w) / f;
        sums[o] += level(idx, count)?;
        hits[o] += 1;
        Ok(())
    })?;

    let mut pixels = Vec::with_capacity(sums.len());
    for oy in 0..out_h {
        let ch = u64::from(factor.min(height - oy * factor));
        for ox in 0..out_w {
            let cw = u64::from(factor.min(width - ox * factor));
            let covered = cw * ch;
            let o = oy as usize * ow + ox as usize;
            let empty = covered - hits[o];
            let mean = (sums[o] + empty as f64 * zero_level) / covered as f64;
            pixels.push(quantize.apply(mean));
        }
    }
    Ok(GrayImage::from_bytes(out_w, out_h, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dense test grid
    struct Grid {
        width: u32,
        height: u32,
        counts: Vec<u32>,
    }

    impl BinSource for Grid {
        fn grid_size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn for_each_nonzero(&self, f: &mut dyn FnMut(usize, u32)) {
            for (i, &c) in self.counts.iter().enumerate() {
                if c != 0 {
                    f(i, c);
                }
            }
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(Quantize::Round.apply(254.5), 255);
        assert_eq!(Quantize::Round.apply(2.49), 2);
        assert_eq!(Quantize::Truncate.apply(254.999), 254);
        assert_eq!(Quantize::Truncate.apply(-3.0), 0);
        assert_eq!(Quantize::Round.apply(1e9), 255);
    }

    #[test]
    fn test_downscale_factor() {
        assert_eq!(downscale_factor(81, 81, 4096), 1);
        assert_eq!(downscale_factor(4097, 3, 4096), 2);
        assert_eq!(downscale_factor(9, 5, 3), 3);
    }

    #[test]
    fn test_full_size_render() {
        let grid = Grid {
            width: 3,
            height: 1,
            counts: vec![0, 2, 4],
        };
        let img = render_levels(&grid, 16, 7.0, Quantize::Round, &mut |_, c| {
            Ok(f64::from(c) * 10.0)
        })
        .unwrap();
        assert_eq!(img.as_bytes().unwrap(), &[7, 20, 40]);
    }

    #[test]
    fn test_downscaled_render_averages_blocks() {
        // 5x3 grid, factor 2 -> 3x2 output; edge blocks are partial.
        let grid = Grid {
            width: 5,
            height: 3,
            counts: vec![
                4, 0, 0, 0, 8, //
                0, 0, 0, 0, 8, //
                2, 2, 0, 0, 1,
            ],
        };
        let img = render_levels(&grid, 3, 0.0, Quantize::Round, &mut |_, c| {
            Ok(f64::from(c))
        })
        .unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        // (4+0+0+0)/4 = 1, 0, (8+8)/2 = 8, (2+2)/2 = 2, 0, 1/1 = 1
        assert_eq!(img.as_bytes().unwrap(), &[1, 0, 8, 2, 0, 1]);
    }

    #[test]
    fn test_errors_stop_the_walk() {
        let grid = Grid {
            width: 4,
            height: 1,
            counts: vec![1, 1, 1, 1],
        };
        let mut calls = 0;
        let result = render_levels(&grid, 16, 0.0, Quantize::Round, &mut |_, _| {
            calls += 1;
            Err(crate::HistError::MissingBin { value: 1 })
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
