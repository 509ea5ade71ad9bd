//! Histogram grid geometry
//!
//! The joint histogram covers the (re, im) plane with unit bins. A sample
//! `c` falls in bin `(floor(c.re) + x_offset, floor(c.im) + y_offset)`, so
//! the origin lands on the center bin. Width and height are
//! `2 * excursion + 1` per axis and therefore always odd.

use sipp_core::{Complex, Extrema};

use crate::{HistError, HistResult};

/// Largest axis excursion whose side `2 * e + 1` still fits in a `u32`.
pub const MAX_EXCURSION: u32 = (u32::MAX - 1) / 2;

/// Size and origin of a joint-histogram grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramGrid {
    re_excursion: u32,
    im_excursion: u32,
}

impl HistogramGrid {
    /// Grid covering every sample with the given extrema.
    ///
    /// An axis excursion is `max(floor(max), ceil(-min))`, never negative.
    /// For integer gradients this is the largest absolute value on the axis.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidParameters`] if either excursion exceeds
    /// [`MAX_EXCURSION`], or if the flat bin range does not fit in `usize`.
    pub fn from_extrema(e: &Extrema) -> HistResult<Self> {
        Self::with_excursions(
            axis_excursion("real", e.min_re, e.max_re)?,
            axis_excursion("imaginary", e.min_im, e.max_im)?,
        )
    }

    /// Grid with explicit per-axis excursions.
    ///
    /// # Errors
    ///
    /// Same limits as [`from_extrema`](Self::from_extrema).
    pub fn with_excursions(re_excursion: u32, im_excursion: u32) -> HistResult<Self> {
        if re_excursion > MAX_EXCURSION || im_excursion > MAX_EXCURSION {
            return Err(HistError::InvalidParameters(format!(
                "gradient excursion {} exceeds {MAX_EXCURSION}",
                re_excursion.max(im_excursion)
            )));
        }
        let grid = Self {
            re_excursion,
            im_excursion,
        };
        if usize::try_from(grid.bin_count()).is_err() {
            return Err(HistError::InvalidParameters(format!(
                "{}x{} histogram grid is not addressable",
                grid.width(),
                grid.height()
            )));
        }
        Ok(grid)
    }

    #[inline]
    pub fn re_excursion(&self) -> u32 {
        self.re_excursion
    }

    #[inline]
    pub fn im_excursion(&self) -> u32 {
        self.im_excursion
    }

    /// Larger of the two axis excursions
    #[inline]
    pub fn max_excursion(&self) -> u32 {
        self.re_excursion.max(self.im_excursion)
    }

    /// Width in bins, `2 * re_excursion + 1`
    #[inline]
    pub fn width(&self) -> u32 {
        2 * self.re_excursion + 1
    }

    /// Height in bins, `2 * im_excursion + 1`
    #[inline]
    pub fn height(&self) -> u32 {
        2 * self.im_excursion + 1
    }

    /// Column of the center bin
    #[inline]
    pub fn x_offset(&self) -> u32 {
        self.re_excursion
    }

    /// Row of the center bin
    #[inline]
    pub fn y_offset(&self) -> u32 {
        self.im_excursion
    }

    /// Total number of bins
    #[inline]
    pub fn bin_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Flat index `v * width + u` of the bin holding `c`.
    ///
    /// Samples outside the grid are clamped to its edge.
    #[inline]
    pub fn bin_of(&self, c: Complex) -> usize {
        let u = clamp_axis(c.re.floor() as i64 + i64::from(self.x_offset()), self.width());
        let v = clamp_axis(c.im.floor() as i64 + i64::from(self.y_offset()), self.height());
        v * self.width() as usize + u
    }

    /// Column and row of a flat index.
    #[inline]
    pub fn coords_of(&self, flat: usize) -> (u32, u32) {
        let w = self.width() as usize;
        ((flat % w) as u32, (flat / w) as u32)
    }

    /// Flat index of the center bin
    #[inline]
    pub fn center(&self) -> usize {
        self.y_offset() as usize * self.width() as usize + self.x_offset() as usize
    }

    /// Euclidean distance in bins from a flat index to the center.
    pub fn distance_from_center(&self, flat: usize) -> f64 {
        let (x, y) = self.coords_of(flat);
        let dx = f64::from(x) - f64::from(self.x_offset());
        let dy = f64::from(y) - f64::from(self.y_offset());
        dx.hypot(dy)
    }
}

fn axis_excursion(axis: &str, min: f64, max: f64) -> HistResult<u32> {
    let e = max.floor().max((-min).ceil());
    if e.is_nan() || e <= 0.0 {
        return Ok(0);
    }
    if e > f64::from(MAX_EXCURSION) {
        return Err(HistError::InvalidParameters(format!(
            "{axis} gradient excursion {e} exceeds {MAX_EXCURSION}"
        )));
    }
    Ok(e as u32)
}

#[inline]
fn clamp_axis(pos: i64, size: u32) -> usize {
    pos.clamp(0, i64::from(size) - 1) as usize
}
