//! Positional percentiles over sorted samples.
//!
//! Every percentile in this crate, the quartiles of a
//! [`SummaryReport`] included, uses one floor-index rule: the `p`-th
//! percentile of `n` sorted values is `sorted[floor(n * p / 100)]`, clamped
//! to the last element. Nothing is interpolated, so a percentile is always an
//! observed value.

use crate::summary::SummaryReport;

/// Requested percentile ranks paired with their values.
///
/// # Examples
///
/// ```
/// use statlab_stats::{percentiles::Percentiles, summary::compute_summary};
///
/// let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let report = compute_summary(&sample).unwrap();
/// let percentiles = Percentiles::from_report(&report, &[10.0, 90.0]);
///
/// // Same rule as the report's quartiles.
/// assert_eq!(percentiles.get(10.0), Some(2.0));
/// assert_eq!(percentiles.get(90.0), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Percentiles {
    /// In request order.
    points: Vec<PercentilePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PercentilePoint {
    /// Percentile rank, 0 to 100.
    pub rank: f64,
    pub value: f64,
}

impl Percentiles {
    /// Looks up `ranks` in the report's sorted sample.
    #[must_use]
    pub fn from_report(report: &SummaryReport, ranks: &[f64]) -> Self {
        Self::from_sorted(&report.sorted_sample, ranks)
    }

    /// Looks up `ranks` in finite values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` contains a non-finite value or is not sorted
    /// in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], ranks: &[f64]) -> Self {
        crate::assert_sorted_finite(sorted_values);
        let points = ranks
            .iter()
            .map(|&rank| PercentilePoint {
                rank,
                value: compute_percentile(sorted_values, rank),
            })
            .collect();
        Self { points }
    }

    /// Value at `rank`, or `None` if that rank was not requested.
    #[must_use]
    pub fn get(&self, rank: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|point| (point.rank - rank).abs() < f64::EPSILON)
            .map(|point| point.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = PercentilePoint> + '_ {
        self.points.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Value at percentile `rank` of `sorted_values`, NaN if there are none.
///
/// ```
/// use statlab_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&values, 25.0), 2.0);
/// assert_eq!(compute_percentile(&values, 100.0), 5.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], rank: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    // A float-to-int cast saturates, so negative ranks land on index 0.
    let idx = (sorted_values.len() as f64 * rank / 100.0) as usize;
    sorted_values[idx.min(last)]
}

/// First quartile, `sorted[floor(n / 4)]`.
///
/// Integer index arithmetic; agrees with `compute_percentile(sorted, 25.0)`.
///
/// # Panics
///
/// Panics if `sorted_values` is empty.
#[must_use]
pub fn lower_quartile(sorted_values: &[f64]) -> f64 {
    sorted_values[sorted_values.len() / 4]
}

/// Third quartile, `sorted[floor(3n / 4)]`.
///
/// # Panics
///
/// Panics if `sorted_values` is empty.
#[must_use]
pub fn upper_quartile(sorted_values: &[f64]) -> f64 {
    sorted_values[sorted_values.len() * 3 / 4]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::compute_summary;

    #[test]
    fn test_empty_percentile_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_percentile_is_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(compute_percentile(&values, 150.0), 3.0);
        assert_eq!(compute_percentile(&values, -10.0), 1.0);
    }

    #[test]
    fn test_quartiles_use_floor_index() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(lower_quartile(&values), 3.0);
        assert_eq!(upper_quartile(&values), 8.0);

        let values = [2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0, 25.0, 35.0, 42.0];
        assert_eq!(lower_quartile(&values), 3.0);
        assert_eq!(upper_quartile(&values), 18.0);
    }

    #[test]
    fn test_quartiles_agree_with_percentiles() {
        for n in 1..40 {
            let values = (0..n).map(f64::from).collect::<Vec<_>>();
            assert_eq!(lower_quartile(&values), compute_percentile(&values, 25.0));
            assert_eq!(upper_quartile(&values), compute_percentile(&values, 75.0));
        }
    }

    #[test]
    fn test_report_percentiles_match_quartiles() {
        let sample = [42.0, 2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0, 25.0, 35.0];
        let report = compute_summary(&sample).unwrap();
        let percentiles = Percentiles::from_report(&report, &[25.0, 75.0, 95.0]);

        assert_eq!(percentiles.get(25.0), Some(report.q1));
        assert_eq!(percentiles.get(75.0), Some(report.q3));
        assert_eq!(percentiles.get(95.0), Some(42.0));
        assert_eq!(percentiles.get(50.0), None);
        let ranks = percentiles.iter().map(|p| p.rank).collect::<Vec<_>>();
        assert_eq!(ranks, vec![25.0, 75.0, 95.0]);
    }

    #[test]
    #[should_panic(expected = "values must be finite")]
    fn test_nan_is_rejected() {
        let _ = Percentiles::from_sorted(&[1.0, f64::NAN], &[50.0]);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = Percentiles::from_sorted(&[3.0, 1.0], &[50.0]);
    }
}
