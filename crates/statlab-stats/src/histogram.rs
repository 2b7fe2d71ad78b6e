use std::ops::Range;

use crate::summary::SummaryReport;

/// Frequency distribution of a sample over equal-width bins.
///
/// The bins cover `[min, max]` exactly. Each bin is half-open; the last bin
/// ends just above `max` so the largest observation is counted.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HistogramBin {
    /// Values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    pub count: u64,
}

impl HistogramBin {
    /// Centre of the bin, where a bar label is usually placed.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statlab_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(&values, 3);
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, vec![3, 3, 4]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `values` contains NaN or an infinity.
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from the report's sorted sample.
    #[must_use]
    pub fn from_report(report: &SummaryReport, num_bins: usize) -> Self {
        Self::from_sorted(&report.sorted_sample, num_bins)
    }

    /// Creates a histogram from values sorted in ascending order.
    ///
    /// Returns an empty histogram when there are no values or no bins. When
    /// every value is equal, a single unit-width bin centred on that value is
    /// produced.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` contains a non-finite value or is not sorted
    /// in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        crate::assert_sorted_finite(sorted_values);

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        let range = max - min;
        if range <= 0.0 {
            return Self {
                bins: vec![HistogramBin {
                    range: (min - 0.5)..(min + 0.5),
                    count: sorted_values.len() as u64,
                }],
            };
        }

        // Boundaries come from the bin index, never from an accumulated width.
        let boundary = |idx: usize| min + range * (idx as f64) / (num_bins as f64);
        let mut bins = (0..num_bins)
            .map(|idx| {
                let end = if idx == num_bins - 1 {
                    max.next_up()
                } else {
                    boundary(idx + 1)
                };
                HistogramBin {
                    range: boundary(idx)..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        let width = range / num_bins as f64;
        for &val in sorted_values {
            let mut idx = (((val - min) / width).floor() as usize).min(num_bins - 1);
            // Rounding in the division can land one bin off a boundary.
            while idx > 0 && val < bins[idx].range.start {
                idx -= 1;
            }
            while idx < num_bins - 1 && val >= bins[idx].range.end {
                idx += 1;
            }
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Largest bin count, zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Sturges' rule: `ceil(log2 n) + 1` bins, zero for an empty sample.
///
/// ```
/// # use statlab_stats::histogram::sturges_bin_count;
/// assert_eq!(sturges_bin_count(1), 1);
/// assert_eq!(sturges_bin_count(11), 5);
/// assert_eq!(sturges_bin_count(16), 5);
/// ```
#[must_use]
pub fn sturges_bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    n.next_power_of_two().trailing_zeros() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::compute_summary;

    #[test]
    fn test_empty_inputs() {
        assert!(Histogram::new(&[], 5).bins.is_empty());
        assert!(Histogram::new(&[1.0, 2.0], 0).bins.is_empty());
    }

    #[test]
    fn test_constant_sample_gets_one_bin() {
        let histogram = Histogram::new(&[4.0, 4.0, 4.0], 5);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].range, 3.5..4.5);
        assert_eq!(histogram.bins[0].count, 3);
        assert_eq!(histogram.bins[0].midpoint(), 4.0);
    }

    #[test]
    fn test_bins_cover_min_to_max() {
        let sample = [2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0, 25.0, 35.0, 42.0];
        let report = compute_summary(&sample).unwrap();
        let histogram = Histogram::from_report(&report, 4);

        assert_eq!(histogram.bins.len(), 4);
        assert_eq!(histogram.bins[0].range.start, 2.0);
        assert!(histogram.bins[3].range.contains(&42.0));
        let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, vec![6, 2, 1, 2]);
        assert_eq!(histogram.total_count(), 11);
        assert_eq!(histogram.max_count(), 6);
    }

    #[test]
    fn test_every_value_lands_in_its_bin() {
        let values = (0..97).map(|i| f64::from(i) * 0.1).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, 7);
        assert_eq!(histogram.total_count(), 97);
        for window in histogram.bins.windows(2) {
            assert_eq!(window[0].range.end, window[1].range.start);
        }
        for &v in &values {
            let hits = histogram
                .bins
                .iter()
                .filter(|b| b.range.contains(&v))
                .count();
            assert_eq!(hits, 1, "value {v} must fall in exactly one bin");
        }
    }

    #[test]
    #[should_panic(expected = "values must be finite")]
    fn test_nan_is_rejected() {
        let _ = Histogram::new(&[1.0, f64::NAN], 3);
    }

    #[test]
    fn test_sturges() {
        assert_eq!(sturges_bin_count(0), 0);
        assert_eq!(sturges_bin_count(2), 2);
        assert_eq!(sturges_bin_count(100), 8);
    }
}
