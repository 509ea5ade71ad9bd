//! Delentropy of a joint gradient histogram
//!
//! Delentropy is the Shannon entropy of the joint histogram of an image's
//! gradient components. Because entropy only depends on which bin counts
//! occur, the per-bin work is done once per distinct count, through the
//! histogram's [`DistinctValueTable`](sipp_hist::DistinctValueTable).
//!
//! The aggregate is reported as computed. Callers that follow the
//! convention of halving it (one half per gradient component) do so
//! themselves.

use sipp_core::GrayImage;
use sipp_hist::{HistError, HistogramStorage, Quantize};

use crate::EntropyResult;
use crate::table::EntropyTable;

/// Delentropy of a histogram, with its per-bin and per-pixel renderings
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sipp_core::GrayImage;
/// use sipp_entropy::DelentropyCalculator;
/// use sipp_filter::GradientField;
/// use sipp_hist::{HistogramOptions, HistogramStorage};
///
/// // A ramp has a single gradient value, so zero delentropy.
/// let src = GrayImage::from_bytes(3, 3, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// let field = Arc::new(GradientField::from_source(&src));
/// let hist = HistogramStorage::build(field, &HistogramOptions::default()).unwrap();
/// let dent = DelentropyCalculator::build(&hist);
/// assert_eq!(dent.aggregate_delentropy(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DelentropyCalculator<'a> {
    hist: &'a HistogramStorage,
    table: EntropyTable,
}

impl<'a> DelentropyCalculator<'a> {
    /// Compute the entropy contribution of every distinct bin count.
    pub fn build(hist: &'a HistogramStorage) -> Self {
        let table = EntropyTable::from_distinct_values(hist.distinct_values(), hist.total_samples());
        tracing::debug!(
            distinct = table.len(),
            aggregate = table.aggregate(),
            max_contribution = table.max_contribution(),
            "computed delentropy"
        );
        Self { hist, table }
    }

    /// The histogram this was computed from
    #[inline]
    pub fn histogram(&self) -> &'a HistogramStorage {
        self.hist
    }

    /// Per-slot contributions
    #[inline]
    pub fn entropy_table(&self) -> &EntropyTable {
        &self.table
    }

    /// Sum of all bin contributions, not halved
    #[inline]
    pub fn aggregate_delentropy(&self) -> f64 {
        self.table.aggregate()
    }

    /// Largest single-bin contribution
    #[inline]
    pub fn max_entropy_contribution(&self) -> f64 {
        self.table.max_contribution()
    }

    /// Render the histogram grid with each bin replaced by its scaled
    /// contribution. Empty bins are black.
    pub fn histogram_entropy_image(&self) -> EntropyResult<GrayImage> {
        Ok(self.hist.render_substitute(&self.table.to_gray_levels(), 0)?)
    }

    /// Render the gradient field with each pixel replaced by the scaled
    /// contribution of the bin it fell in.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::MissingBin`] if a sample's bin count has no slot
    /// in the distinct-value table.
    pub fn gradient_entropy_image(&self) -> EntropyResult<GrayImage> {
        let field = self.hist.gradient();
        let table = self.hist.distinct_values();
        let scale = self.table.gray_scale();

        let mut pixels = Vec::with_capacity(field.len());
        for i in 0..field.len() {
            let count = self.hist.count_for_sample(i).unwrap_or(0);
            let contribution = table
                .slot_of(count)
                .and_then(|slot| self.table.contribution(slot))
                .ok_or(HistError::MissingBin { value: count })?;
            pixels.push(Quantize::Truncate.apply(contribution * scale));
        }
        Ok(GrayImage::from_bytes(field.width(), field.height(), pixels)?)
    }
}
