//! Descriptive summary of a numeric sample.
//!
//! [`compute_summary`] is the single place where central tendency, quartiles,
//! dispersion and outlier fences are derived. Box plots, histograms and any
//! other view of a sample read their numbers from the [`SummaryReport`] so
//! that every consumer agrees on the conventions used.

use crate::{
    error::{DegenerateSampleError, InvalidInputError},
    frequency::FrequencyTable,
    percentiles,
};

/// Multiplier applied to the IQR to place the outlier fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Sample variance and its square root.
///
/// Only present for samples with at least two observations.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Dispersion {
    /// Sample variance with Bessel's correction (divisor `n - 1`).
    pub variance: f64,
    /// Non-negative square root of the variance.
    pub std_dev: f64,
}

/// Standard deviation as a percentage of the mean.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, derive_more::IsVariant)]
pub enum CoefficientOfVariation {
    Percent(f64),
    /// The mean is zero relative to the sample scale, or the sample is too
    /// small to have a standard deviation.
    NotApplicable,
}

impl CoefficientOfVariation {
    #[must_use]
    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Percent(value) => Some(value),
            Self::NotApplicable => None,
        }
    }
}

/// Descriptive statistics of one sample.
///
/// Created by [`compute_summary`]. A report never changes after it is built;
/// summarize the new sample again when the data changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryReport {
    /// Number of observations.
    pub count: usize,
    /// Ascending copy of the sample.
    pub sorted_sample: Vec<f64>,
    /// Summed left to right over `sorted_sample`, not input order, so it can
    /// differ in the last bit from an input-order sum.
    pub mean: f64,
    pub median: f64,
    /// All values sharing the highest occurrence count, ascending.
    pub modes: Vec<f64>,
    /// First quartile, `sorted[floor(n / 4)]`.
    pub q1: f64,
    /// Third quartile, `sorted[floor(3n / 4)]`.
    pub q3: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// `q1 - 1.5 * iqr`. May lie inside the sample range.
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`. May lie inside the sample range.
    pub upper_fence: f64,
    /// Values strictly outside the fences, ascending, duplicates kept.
    pub outliers: Vec<f64>,
    /// `None` for a single observation.
    pub dispersion: Option<Dispersion>,
    pub cv: CoefficientOfVariation,
}

impl SummaryReport {
    /// Sample variance.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateSampleError`] when the sample has one observation.
    pub fn variance(&self) -> Result<f64, DegenerateSampleError> {
        self.require_dispersion("variance").map(|d| d.variance)
    }

    /// Sample standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateSampleError`] when the sample has one observation.
    pub fn std_dev(&self) -> Result<f64, DegenerateSampleError> {
        self.require_dispersion("standard deviation").map(|d| d.std_dev)
    }

    /// Whether `value` falls strictly outside the fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }

    fn require_dispersion(
        &self,
        statistic: &'static str,
    ) -> Result<Dispersion, DegenerateSampleError> {
        self.dispersion.ok_or(DegenerateSampleError {
            statistic,
            count: self.count,
            required: 2,
        })
    }
}

/// Computes the descriptive summary of `sample`.
///
/// The sample is copied and sorted once; the caller's slice is not modified.
/// Sums run over the sorted copy, so any permutation of the same values
/// produces an identical report. Values too large to add or square directly
/// are rescaled by the largest magnitude before summing.
///
/// # Errors
///
/// * [`InvalidInputError::Empty`] if `sample` is empty.
/// * [`InvalidInputError::NonFinite`] for the first NaN or infinite value.
/// * [`InvalidInputError::Overflow`] if the range or the variance itself
///   exceeds `f64::MAX`.
///
/// # Examples
///
/// ```
/// use statlab_stats::summary::compute_summary;
///
/// let report = compute_summary(&[4.0, 6.0, 6.0, 6.0, 8.0]).unwrap();
/// assert_eq!(report.mean, 6.0);
/// assert_eq!(report.median, 6.0);
/// assert_eq!(report.modes, vec![6.0]);
/// assert_eq!(report.variance(), Ok(2.0));
/// ```
///
/// A single observation has a mean but no spread:
///
/// ```
/// use statlab_stats::summary::{compute_summary, CoefficientOfVariation};
///
/// let report = compute_summary(&[5.0]).unwrap();
/// assert_eq!(report.mean, 5.0);
/// assert!(report.variance().is_err());
/// assert_eq!(report.cv, CoefficientOfVariation::NotApplicable);
/// ```
pub fn compute_summary(sample: &[f64]) -> Result<SummaryReport, InvalidInputError> {
    if sample.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(InvalidInputError::NonFinite { index, value });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let min = sorted[0];
    let max = sorted[count - 1];
    let range = max - min;
    if !range.is_finite() {
        return Err(InvalidInputError::Overflow { statistic: "range" });
    }

    let mean = scaled_mean(&sorted, min.abs().max(max.abs()));

    let mid = count / 2;
    let median = if count % 2 == 1 {
        sorted[mid]
    } else {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    };

    let modes = FrequencyTable::from_sorted(&sorted).modes();

    let q1 = percentiles::lower_quartile(&sorted);
    let q3 = percentiles::upper_quartile(&sorted);
    let iqr = q3 - q1;
    let lower_fence = q1 - FENCE_FACTOR * iqr;
    let upper_fence = q3 + FENCE_FACTOR * iqr;
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    let dispersion = if count < 2 {
        None
    } else {
        let variance = scaled_variance(&sorted, mean);
        if !variance.is_finite() {
            return Err(InvalidInputError::Overflow {
                statistic: "variance",
            });
        }
        Some(Dispersion {
            variance,
            std_dev: variance.sqrt(),
        })
    };

    let cv = coefficient_of_variation(mean, dispersion, min, max);

    Ok(SummaryReport {
        count,
        sorted_sample: sorted,
        mean,
        median,
        modes,
        q1,
        q3,
        iqr,
        min,
        max,
        range,
        lower_fence,
        upper_fence,
        outliers,
        dispersion,
        cv,
    })
}

/// Left-to-right mean of `sorted`.
///
/// When the plain sum overflows, every term is divided by `scale` (the
/// largest magnitude) first, so the mean is found whenever it fits in `f64`.
#[expect(clippy::cast_precision_loss)]
fn scaled_mean(sorted: &[f64], scale: f64) -> f64 {
    let n = sorted.len() as f64;
    let sum = sorted.iter().sum::<f64>();
    if sum.is_finite() {
        return sum / n;
    }
    let mean = sorted.iter().map(|v| v / scale).sum::<f64>() / n * scale;
    // Rounding must not push the rescaled mean outside the sample.
    mean.clamp(sorted[0], sorted[sorted.len() - 1])
}

/// Sample variance of `sorted` around `mean`, `sorted.len() >= 2`.
///
/// Falls back to deviations scaled by the largest deviation when the squares
/// overflow. The result is infinite only when the variance itself exceeds
/// `f64::MAX`.
#[expect(clippy::cast_precision_loss)]
fn scaled_variance(sorted: &[f64], mean: f64) -> f64 {
    let denominator = (sorted.len() - 1) as f64;
    let squared_deviations = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    if squared_deviations.is_finite() {
        return squared_deviations / denominator;
    }
    let scale = sorted
        .iter()
        .map(|v| (v - mean).abs())
        .fold(0.0, f64::max);
    let scaled = sorted
        .iter()
        .map(|v| ((v - mean) / scale).powi(2))
        .sum::<f64>();
    scaled / denominator * scale * scale
}

fn coefficient_of_variation(
    mean: f64,
    dispersion: Option<Dispersion>,
    min: f64,
    max: f64,
) -> CoefficientOfVariation {
    let Some(dispersion) = dispersion else {
        return CoefficientOfVariation::NotApplicable;
    };
    // Relative to the largest magnitude in the sample, so rounding residue
    // from summing values of mixed sign still counts as a zero mean.
    let scale = min.abs().max(max.abs());
    if mean.abs() <= scale * f64::EPSILON {
        return CoefficientOfVariation::NotApplicable;
    }
    let percent = dispersion.std_dev / mean * 100.0;
    if percent.is_finite() {
        CoefficientOfVariation::Percent(percent)
    } else {
        CoefficientOfVariation::NotApplicable
    }
}
