//! Occurrence counts of distinct sample values.
//!
//! # Examples
//!
//! ```
//! use statlab_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::new(&[4.0, 6.0, 6.0, 6.0, 8.0]);
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.count_of(6.0), 3);
//! assert_eq!(table.modes(), vec![6.0]);
//! ```

use std::cmp::Ordering;

/// A distinct value and how many times it occurs in the sample.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Frequency {
    pub value: f64,
    pub count: usize,
}

/// Distinct sample values in ascending order, each with its occurrence count.
///
/// Values that compare equal with `==` share one entry, so `-0.0` and `0.0`
/// are counted together under whichever sorts first.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrequencyTable {
    entries: Vec<Frequency>,
}

impl FrequencyTable {
    /// Builds the table from unsorted values.
    ///
    /// # Panics
    ///
    /// Panics if `values` contains NaN or an infinity.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Builds the table from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` contains a non-finite value or is not sorted
    /// in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        crate::assert_sorted_finite(sorted_values);

        let entries = sorted_values
            .chunk_by(|a, b| a == b)
            .map(|run| Frequency {
                value: run[0],
                count: run.len(),
            })
            .collect();
        Self { entries }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Frequency> + '_ {
        self.entries.iter().copied()
    }

    /// Occurrences of `value`, zero if it is not in the sample.
    #[must_use]
    pub fn count_of(&self, value: f64) -> usize {
        self.entries
            .binary_search_by(|entry| entry.value.partial_cmp(&value).unwrap_or(Ordering::Less))
            .map_or(0, |idx| self.entries[idx].count)
    }

    /// Highest occurrence count, zero for an empty table.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).max().unwrap_or(0)
    }

    /// Every value that reaches [`max_count`](Self::max_count), ascending.
    ///
    /// Ties are not broken: a bimodal sample returns two modes, and a sample
    /// where every value occurs equally often returns all of them.
    ///
    /// ```
    /// use statlab_stats::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::new(&[3.0, 1.0, 3.0, 1.0, 2.0]);
    /// assert_eq!(table.modes(), vec![1.0, 3.0]);
    /// ```
    #[must_use]
    pub fn modes(&self) -> Vec<f64> {
        let max_count = self.max_count();
        self.entries
            .iter()
            .filter(|entry| entry.count == max_count)
            .map(|entry| entry.value)
            .collect()
    }
}
