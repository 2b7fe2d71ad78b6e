//! Descriptive statistics for the statlab visualizations.
//!
//! This crate provides:
//!
//! - **Summary statistics**: mean, median, modes, quartiles, dispersion,
//!   outlier fences and outliers of a sample, computed in one place
//! - **Percentiles**: the floor-index percentile rule shared by every view
//! - **Frequency tables**: distinct values with their occurrence counts
//! - **Box plots**: whiskers and outlier severity derived from a summary
//! - **Histograms**: equal-width frequency distributions
//!
//! # Modules
//!
//! - [`summary`]: the summary engine, [`summary::compute_summary`]
//! - [`percentiles`]: percentile and quartile computation
//! - [`frequency`]: frequency tables and modes
//! - [`box_plot`]: box-and-whisker geometry
//! - [`histogram`]: histogram construction
//! - [`error`]: input and sample-size errors
//!
//! # Examples
//!
//! ## Summarizing a sample
//!
//! ```
//! use statlab_stats::summary::compute_summary;
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let report = compute_summary(&sample).unwrap();
//! assert_eq!(report.mean, 5.5);
//! assert_eq!(report.q1, 3.0);
//! assert_eq!(report.q3, 8.0);
//! ```
//!
//! ## Drawing a box plot
//!
//! ```
//! use statlab_stats::{box_plot::BoxPlot, summary::compute_summary};
//!
//! let report = compute_summary(&[1.0, 2.0, 2.0, 3.0, 40.0]).unwrap();
//! let plot = BoxPlot::from_report(&report);
//! assert_eq!(plot.upper_whisker, 3.0);
//! assert_eq!(plot.outliers[0].value, 40.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use statlab_stats::histogram::{sturges_bin_count, Histogram};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(&values, sturges_bin_count(values.len()));
//! assert_eq!(histogram.total_count(), 10);
//! ```

pub use self::error::{DegenerateSampleError, InvalidInputError};

pub mod box_plot;
pub mod error;
pub mod frequency;
pub mod histogram;
pub mod percentiles;
pub mod summary;

/// Precondition of every `from_sorted` constructor: finite values in
/// ascending order.
fn assert_sorted_finite(sorted_values: &[f64]) {
    assert!(sorted_values.iter().all(|v| v.is_finite()), "values must be finite");
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
}
