//! Per-value entropy contributions

use sipp_hist::{DistinctValueTable, Quantize};

/// Entropy contribution of each distinct bin count
///
/// Slot `i` holds `-p * log2(p)` for `p = pairs[i].value / total`, where
/// `pairs` are the pairs of the table it was built from. The aggregate sums
/// `contribution * occurrences` in table order, so two histograms with the
/// same multiset of counts always give bit-identical aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyTable {
    contributions: Vec<f64>,
    max_contribution: f64,
    aggregate: f64,
}

impl EntropyTable {
    /// Build from a distinct-value table and the number of samples binned.
    ///
    /// A `total` of 0 gives an empty table.
    pub fn from_distinct_values(table: &DistinctValueTable, total: u64) -> Self {
        if total == 0 {
            return Self {
                contributions: Vec::new(),
                max_contribution: 0.0,
                aggregate: 0.0,
            };
        }

        let total = total as f64;
        let mut contributions = Vec::with_capacity(table.len());
        let mut max_contribution = 0.0f64;
        let mut aggregate = 0.0;
        for pair in table.pairs() {
            let p = f64::from(pair.value) / total;
            let c = -p * p.log2();
            max_contribution = max_contribution.max(c);
            aggregate += c * f64::from(pair.occurrences);
            contributions.push(c);
        }
        Self {
            contributions,
            max_contribution,
            aggregate,
        }
    }

    /// Contributions, aligned with the slots of the source table
    #[inline]
    pub fn contributions(&self) -> &[f64] {
        &self.contributions
    }

    #[inline]
    pub fn contribution(&self, slot: usize) -> Option<f64> {
        self.contributions.get(slot).copied()
    }

    /// Largest single contribution
    #[inline]
    pub fn max_contribution(&self) -> f64 {
        self.max_contribution
    }

    /// Sum of `contribution * occurrences` over all slots
    #[inline]
    pub fn aggregate(&self) -> f64 {
        self.aggregate
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Multiplier mapping the largest contribution to 255, or 0 when every
    /// contribution is 0.
    pub fn gray_scale(&self) -> f64 {
        if self.max_contribution > 0.0 {
            255.0 / self.max_contribution
        } else {
            0.0
        }
    }

    /// Contributions scaled to `0..=255`, truncating.
    pub fn to_gray_levels(&self) -> Vec<u8> {
        let scale = self.gray_scale();
        self.contributions
            .iter()
            .map(|&c| Quantize::Truncate.apply(c * scale))
            .collect()
    }
}
