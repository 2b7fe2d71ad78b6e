//! Box-and-whisker geometry.
//!
//! A [`BoxPlot`] is read straight off a [`SummaryReport`]: the box spans
//! `q1..q3`, the whiskers reach the most extreme observations still inside
//! the fences, and everything beyond is drawn as an outlier point.
//!
//! Outliers are further split with the boxplot convention of two fence
//! levels: values within `3 * IQR` of the nearer quartile are *mild*,
//! values beyond it are *severe*.

use crate::summary::SummaryReport;

/// Multiplier applied to the IQR for the severe-outlier threshold.
pub const SEVERE_FENCE_FACTOR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::IsVariant)]
pub enum OutlierSide {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::IsVariant)]
pub enum OutlierSeverity {
    Mild,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Outlier {
    pub value: f64,
    pub side: OutlierSide,
    pub severity: OutlierSeverity,
}

/// Everything needed to draw one box plot.
///
/// # Examples
///
/// ```
/// use statlab_stats::{box_plot::BoxPlot, summary::compute_summary};
///
/// let sample = [2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0, 25.0, 35.0, 42.0];
/// let report = compute_summary(&sample).unwrap();
/// let plot = BoxPlot::from_report(&report);
///
/// assert_eq!(plot.lower_whisker, 2.0);
/// assert_eq!(plot.upper_whisker, 35.0);
/// assert_eq!(plot.outliers.len(), 1);
/// assert!(plot.outliers[0].severity.is_mild());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BoxPlot {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Smallest observation not below the lower fence.
    pub lower_whisker: f64,
    /// Largest observation not above the upper fence.
    pub upper_whisker: f64,
    /// Ascending, duplicates kept.
    pub outliers: Vec<Outlier>,
}

impl BoxPlot {
    #[must_use]
    pub fn from_report(report: &SummaryReport) -> Self {
        let sorted = &report.sorted_sample;

        // q1 and q3 are observations inside the fences, so both searches
        // always find a value.
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= report.lower_fence)
            .unwrap_or(report.q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= report.upper_fence)
            .unwrap_or(report.q3);

        let severe_low = report.q1 - SEVERE_FENCE_FACTOR * report.iqr;
        let severe_high = report.q3 + SEVERE_FENCE_FACTOR * report.iqr;
        let outliers = report
            .outliers
            .iter()
            .map(|&value| {
                let (side, severe) = if value < report.lower_fence {
                    (OutlierSide::Low, value < severe_low)
                } else {
                    (OutlierSide::High, value > severe_high)
                };
                let severity = if severe {
                    OutlierSeverity::Severe
                } else {
                    OutlierSeverity::Mild
                };
                Outlier {
                    value,
                    side,
                    severity,
                }
            })
            .collect();

        Self {
            q1: report.q1,
            median: report.median,
            q3: report.q3,
            lower_fence: report.lower_fence,
            upper_fence: report.upper_fence,
            lower_whisker,
            upper_whisker,
            outliers,
        }
    }

    /// Number of outliers at the given severity.
    #[must_use]
    pub fn count_by_severity(&self, severity: OutlierSeverity) -> usize {
        self.outliers
            .iter()
            .filter(|outlier| outlier.severity == severity)
            .count()
    }
}
