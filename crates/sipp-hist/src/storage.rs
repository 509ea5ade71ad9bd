//! Joint gradient histogram with adaptive storage
//!
//! The histogram counts gradient samples in unit bins over the (re, im)
//! plane. Small grids are stored densely, one `u32` per bin. When the grid
//! is huge and mostly empty, which happens for high-dynamic-range 16-bit
//! sources, only the occupied bins are stored.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use sipp_core::GrayImage;
use sipp_filter::GradientField;

use crate::bins::DistinctValueTable;
use crate::grid::HistogramGrid;
use crate::options::HistogramOptions;
use crate::render::{BinSource, Quantize, render_levels};
use crate::{HistError, HistResult};

/// Words per sparse entry: key 4, count 1, map overhead 2
pub const SPARSE_ENTRY_WORDS: u64 = 7;

/// Backing store of a [`HistogramStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// One counter per bin
    Dense,
    /// Occupied bins only
    Sparse,
}

/// Choose the backing store for a grid.
///
/// Sparse storage is used only when `max_excursion` exceeds the configured
/// threshold and `SPARSE_ENTRY_WORDS * next_power_of_two(num_samples)` is
/// smaller than the dense `width * height`.
pub fn select_storage(
    max_excursion: u32,
    width: u32,
    height: u32,
    num_samples: usize,
    options: &HistogramOptions,
) -> StorageKind {
    let dense_cost = u64::from(width) * u64::from(height);
    let sparse_cost = (num_samples as u64)
        .checked_next_power_of_two()
        .map_or(u64::MAX, |n| n.saturating_mul(SPARSE_ENTRY_WORDS));
    if max_excursion > options.sparse_threshold && sparse_cost < dense_cost {
        StorageKind::Sparse
    } else {
        StorageKind::Dense
    }
}

#[derive(Debug, Clone)]
enum Bins {
    Dense(Vec<u32>),
    /// `(flat_index, count)` sorted by flat index
    Sparse(Vec<(usize, u32)>),
}

/// Suppressed bin values, in nonzero-bin visit order
#[derive(Debug, Clone)]
struct Suppressed {
    values: Vec<f64>,
    max: f64,
}

/// Joint histogram of a gradient field's real and imaginary parts
///
/// Built in a single pass over the field. Apart from the lazily computed
/// suppressed-bin cache, the histogram is immutable once built.
#[derive(Debug, Clone)]
pub struct HistogramStorage {
    gradient: Arc<GradientField>,
    grid: HistogramGrid,
    bins: Bins,
    bin_index: Vec<usize>,
    max_bin_count: u32,
    distinct: DistinctValueTable,
    max_render_extent: u32,
    suppressed: OnceLock<Suppressed>,
}

impl HistogramStorage {
    /// Bin every sample of `gradient`.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidParameters`] if `options` are invalid, or
    /// if the gradient spans more bins than can be addressed or allocated.
    pub fn build(gradient: Arc<GradientField>, options: &HistogramOptions) -> HistResult<Self> {
        options.validate()?;

        let grid = HistogramGrid::from_extrema(&gradient.extrema())?;
        let samples = gradient.samples();
        let kind = select_storage(
            grid.max_excursion(),
            grid.width(),
            grid.height(),
            samples.len(),
            options,
        );
        tracing::debug!(
            ?kind,
            width = grid.width(),
            height = grid.height(),
            samples = samples.len(),
            "selected histogram storage"
        );

        let mut bin_index = Vec::with_capacity(samples.len());
        let mut max_bin_count = 0u32;
        let bins = match kind {
            StorageKind::Dense => {
                let len = grid.bin_count() as usize;
                let mut counts = Vec::new();
                counts.try_reserve_exact(len).map_err(|e| {
                    HistError::InvalidParameters(format!(
                        "cannot allocate {}x{} dense histogram: {e}",
                        grid.width(),
                        grid.height()
                    ))
                })?;
                counts.resize(len, 0u32);
                for &g in samples {
                    let flat = grid.bin_of(g);
                    counts[flat] += 1;
                    max_bin_count = max_bin_count.max(counts[flat]);
                    bin_index.push(flat);
                }
                Bins::Dense(counts)
            }
            StorageKind::Sparse => {
                let mut counts: HashMap<usize, u32> = HashMap::new();
                for &g in samples {
                    let flat = grid.bin_of(g);
                    let count = counts.entry(flat).or_insert(0);
                    *count += 1;
                    max_bin_count = max_bin_count.max(*count);
                    bin_index.push(flat);
                }
                let mut entries: Vec<(usize, u32)> = counts.into_iter().collect();
                entries.sort_unstable_by_key(|&(flat, _)| flat);
                Bins::Sparse(entries)
            }
        };

        let distinct = match &bins {
            Bins::Dense(counts) => DistinctValueTable::from_counts(counts.iter().copied()),
            Bins::Sparse(entries) => {
                DistinctValueTable::from_counts(entries.iter().map(|&(_, c)| c))
            }
        };
        tracing::debug!(
            max_bin_count,
            distinct = distinct.len(),
            occupied = distinct.occupied_bins(),
            "binned gradient samples"
        );

        Ok(Self {
            gradient,
            grid,
            bins,
            bin_index,
            max_bin_count,
            distinct,
            max_render_extent: options.max_render_extent,
            suppressed: OnceLock::new(),
        })
    }

    /// Dense or sparse
    pub fn kind(&self) -> StorageKind {
        match self.bins {
            Bins::Dense(_) => StorageKind::Dense,
            Bins::Sparse(_) => StorageKind::Sparse,
        }
    }

    /// Grid width and height in bins
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    #[inline]
    pub fn grid(&self) -> &HistogramGrid {
        &self.grid
    }

    /// Largest bin count
    #[inline]
    pub fn max_bin_count(&self) -> u32 {
        self.max_bin_count
    }

    /// Distinct nonzero counts with their occurrence counts
    #[inline]
    pub fn distinct_values(&self) -> &DistinctValueTable {
        &self.distinct
    }

    /// The gradient field this histogram was built from
    #[inline]
    pub fn gradient(&self) -> &Arc<GradientField> {
        &self.gradient
    }

    /// Flat bin index of each gradient sample, in scan order
    #[inline]
    pub fn bin_index(&self) -> &[usize] {
        &self.bin_index
    }

    /// Number of binned samples
    #[inline]
    pub fn total_samples(&self) -> u64 {
        self.bin_index.len() as u64
    }

    /// Count of the bin at `flat`, 0 when empty or out of range.
    pub fn count_at(&self, flat: usize) -> u32 {
        match &self.bins {
            Bins::Dense(counts) => counts.get(flat).copied().unwrap_or(0),
            Bins::Sparse(entries) => entries
                .binary_search_by_key(&flat, |&(f, _)| f)
                .map_or(0, |i| entries[i].1),
        }
    }

    /// Count of the bin holding gradient sample `i`.
    pub fn count_for_sample(&self, i: usize) -> Option<u32> {
        self.bin_index.get(i).map(|&flat| self.count_at(flat))
    }

    /// Distinct-value slot of the bin holding gradient pixel `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::IndexOutOfBounds`] if `(x, y)` is outside the
    /// gradient field, and [`HistError::MissingBin`] if the bin's count has
    /// no slot in the distinct-value table.
    pub fn bin_count_for(&self, x: u32, y: u32) -> HistResult<usize> {
        let (width, height) = (self.gradient.width(), self.gradient.height());
        if x >= width || y >= height {
            return Err(HistError::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let flat = self.bin_index[y as usize * width as usize + x as usize];
        self.slot_for_count(self.count_at(flat))
    }

    fn slot_for_count(&self, value: u32) -> HistResult<usize> {
        self.distinct
            .slot_of(value)
            .ok_or(HistError::MissingBin { value })
    }

    /// Render the grid to 8 bits.
    ///
    /// With `clip`, counts are capped at 255. Otherwise `[0, max_bin_count]`
    /// is rescaled linearly to `[0, 255]`, rounding half up.
    pub fn render(&self, clip: bool) -> HistResult<GrayImage> {
        let scale = if self.max_bin_count > 0 {
            255.0 / f64::from(self.max_bin_count)
        } else {
            0.0
        };
        render_levels(
            self,
            self.max_render_extent,
            0.0,
            Quantize::Round,
            &mut |_, count| {
                Ok(if clip {
                    f64::from(count.min(255))
                } else {
                    f64::from(count) * scale
                })
            },
        )
    }

    /// Render bins weighted by their distance from the center.
    ///
    /// Each count is multiplied by `distance / max_modulus` and the largest
    /// result maps to 255 (truncating). A field with zero modulus renders
    /// all black.
    pub fn render_suppressed(&self) -> HistResult<GrayImage> {
        let suppressed = self.suppressed();
        let max = suppressed.max;
        let mut k = 0;
        render_levels(
            self,
            self.max_render_extent,
            0.0,
            Quantize::Truncate,
            &mut |_, _| {
                let v = suppressed.values.get(k).copied().unwrap_or(0.0);
                k += 1;
                // Divide last so the largest value lands exactly on 255.
                Ok(if max > 0.0 { v * 255.0 / max } else { 0.0 })
            },
        )
    }

    /// Largest suppressed bin value, 0 for a zero-modulus field.
    pub fn max_suppressed(&self) -> f64 {
        self.suppressed().max
    }

    fn suppressed(&self) -> &Suppressed {
        self.suppressed.get_or_init(|| {
            let max_modulus = self.gradient.max_modulus();
            if max_modulus <= 0.0 {
                return Suppressed {
                    values: Vec::new(),
                    max: 0.0,
                };
            }
            let mut values = Vec::new();
            let mut max = 0.0f64;
            self.for_each_nonzero(&mut |flat, count| {
                let v = f64::from(count) * self.grid.distance_from_center(flat) / max_modulus;
                max = max.max(v);
                values.push(v);
            });
            Suppressed { values, max }
        })
    }

    /// Render each bin as `substitutes[slot]` where `slot` is the bin
    /// count's slot in the distinct-value table. Empty bins get `zero_fill`.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::SubstituteLengthMismatch`] if `substitutes` does
    /// not have one entry per distinct value.
    pub fn render_substitute(&self, substitutes: &[u8], zero_fill: u8) -> HistResult<GrayImage> {
        if substitutes.len() != self.distinct.len() {
            return Err(HistError::SubstituteLengthMismatch {
                expected: self.distinct.len(),
                actual: substitutes.len(),
            });
        }
        render_levels(
            self,
            self.max_render_extent,
            f64::from(zero_fill),
            Quantize::Round,
            &mut |_, count| Ok(f64::from(substitutes[self.slot_for_count(count)?])),
        )
    }
}

impl BinSource for HistogramStorage {
    fn grid_size(&self) -> (u32, u32) {
        self.size()
    }

    fn for_each_nonzero(&self, f: &mut dyn FnMut(usize, u32)) {
        match &self.bins {
            Bins::Dense(counts) => {
                for (flat, &count) in counts.iter().enumerate() {
                    if count != 0 {
                        f(flat, count);
                    }
                }
            }
            Bins::Sparse(entries) => {
                for &(flat, count) in entries {
                    f(flat, count);
                }
            }
        }
    }
}
