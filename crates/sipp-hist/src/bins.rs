//! Distinct bin values - the histogram of the histogram
//!
//! Entropy only depends on which counts occur and how often, so a joint
//! histogram with millions of bins usually collapses to a few dozen
//! [`BinPair`]s. Pairs are kept in ascending `value` order, which makes the
//! table canonical: two histograms with the same multiset of counts produce
//! identical tables.

use std::collections::HashMap;
use std::sync::OnceLock;

/// A nonzero bin count and the number of bins holding exactly that count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinPair {
    /// Bin count
    pub value: u32,
    /// Number of bins with this count
    pub occurrences: u32,
}

impl BinPair {
    pub const fn new(value: u32, occurrences: u32) -> Self {
        Self { value, occurrences }
    }
}

/// Distinct nonzero bin counts with their occurrence counts
///
/// The `value -> slot` lookup is built on first use and shared afterwards.
#[derive(Debug, Clone, Default)]
pub struct DistinctValueTable {
    pairs: Vec<BinPair>,
    inverted: OnceLock<HashMap<u32, usize>>,
}

impl DistinctValueTable {
    /// Build from a sequence of bin counts. Zero counts are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sipp_hist::{BinPair, DistinctValueTable};
    ///
    /// let table = DistinctValueTable::from_counts([0, 3, 1, 3, 0, 1, 1]);
    /// assert_eq!(table.pairs(), &[BinPair::new(1, 3), BinPair::new(3, 2)]);
    /// assert_eq!(table.total_samples(), 9);
    /// ```
    pub fn from_counts<I: IntoIterator<Item = u32>>(counts: I) -> Self {
        let mut occurrences: HashMap<u32, u32> = HashMap::new();
        for count in counts.into_iter().filter(|&c| c != 0) {
            *occurrences.entry(count).or_insert(0) += 1;
        }
        let mut pairs: Vec<BinPair> = occurrences
            .into_iter()
            .map(|(value, n)| BinPair::new(value, n))
            .collect();
        pairs.sort_unstable_by_key(|p| p.value);
        Self::from_sorted(pairs)
    }

    /// Build from pairs in any order.
    ///
    /// Pairs with equal values are merged; pairs with a zero value or zero
    /// occurrences are dropped.
    pub fn from_pairs<I: IntoIterator<Item = BinPair>>(pairs: I) -> Self {
        let mut pairs: Vec<BinPair> = pairs
            .into_iter()
            .filter(|p| p.value > 0 && p.occurrences > 0)
            .collect();
        pairs.sort_unstable_by_key(|p| p.value);
        pairs.dedup_by(|later, kept| {
            if later.value == kept.value {
                kept.occurrences += later.occurrences;
                true
            } else {
                false
            }
        });
        Self::from_sorted(pairs)
    }

    fn from_sorted(pairs: Vec<BinPair>) -> Self {
        Self {
            pairs,
            inverted: OnceLock::new(),
        }
    }

    /// Pairs in ascending value order
    #[inline]
    pub fn pairs(&self) -> &[BinPair] {
        &self.pairs
    }

    /// Number of distinct nonzero counts
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sum of `value * occurrences`, i.e. the number of samples binned.
    pub fn total_samples(&self) -> u64 {
        self.pairs
            .iter()
            .map(|p| u64::from(p.value) * u64::from(p.occurrences))
            .sum()
    }

    /// Number of occupied bins
    pub fn occupied_bins(&self) -> u64 {
        self.pairs.iter().map(|p| u64::from(p.occurrences)).sum()
    }

    /// Largest count, or 0 for an empty table.
    pub fn max_value(&self) -> u32 {
        self.pairs.last().map_or(0, |p| p.value)
    }

    /// Slot of `value` in [`pairs`](Self::pairs).
    pub fn slot_of(&self, value: u32) -> Option<usize> {
        self.inverted_index().get(&value).copied()
    }

    /// The `value -> slot` map, built on first call.
    pub fn inverted_index(&self) -> &HashMap<u32, usize> {
        self.inverted.get_or_init(|| {
            self.pairs
                .iter()
                .enumerate()
                .map(|(slot, p)| (p.value, slot))
                .collect()
        })
    }
}

impl PartialEq for DistinctValueTable {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for DistinctValueTable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_ascending() {
        let table = DistinctValueTable::from_counts([5, 0, 2, 5, 5, 2, 9]);
        assert_eq!(
            table.pairs(),
            &[BinPair::new(2, 2), BinPair::new(5, 3), BinPair::new(9, 1)]
        );
        assert_eq!(table.total_samples(), 28);
        assert_eq!(table.occupied_bins(), 6);
        assert_eq!(table.max_value(), 9);
    }

    #[test]
    fn test_from_pairs_merges_and_sorts() {
        let table = DistinctValueTable::from_pairs([
            BinPair::new(4, 1),
            BinPair::new(1, 2),
            BinPair::new(4, 3),
            BinPair::new(0, 7),
            BinPair::new(6, 0),
        ]);
        assert_eq!(table.pairs(), &[BinPair::new(1, 2), BinPair::new(4, 4)]);
    }

    #[test]
    fn test_order_independent() {
        let a = DistinctValueTable::from_counts([1, 2, 3, 3]);
        let b = DistinctValueTable::from_counts([3, 1, 3, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_slot_lookup_is_stable() {
        let table = DistinctValueTable::from_counts([7, 3, 3, 1]);
        assert_eq!(table.slot_of(1), Some(0));
        assert_eq!(table.slot_of(3), Some(1));
        assert_eq!(table.slot_of(7), Some(2));
        assert_eq!(table.slot_of(2), None);
        let first = table.inverted_index() as *const _;
        let second = table.inverted_index() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn test_large_counts_stay_compact() {
        let table = DistinctValueTable::from_counts([300_000_000, 0, u32::MAX, 300_000_000]);
        assert_eq!(
            table.pairs(),
            &[BinPair::new(300_000_000, 2), BinPair::new(u32::MAX, 1)]
        );
        assert_eq!(table.occupied_bins(), 3);
        assert_eq!(table.total_samples(), 600_000_000 + u64::from(u32::MAX));
        assert_eq!(table.slot_of(u32::MAX), Some(1));
    }

    #[test]
    fn test_empty() {
        let table = DistinctValueTable::from_counts(std::iter::empty());
        assert!(table.is_empty());
        assert_eq!(table.total_samples(), 0);
        assert_eq!(table.max_value(), 0);
        assert_eq!(table.slot_of(1), None);
    }
}
