/// Rejected input to [`compute_summary`](crate::summary::compute_summary).
#[derive(
    Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum InvalidInputError {
    #[display("sample is empty")]
    Empty,
    #[display("sample value at index {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
    #[display("{statistic} overflowed; sample values are too large to summarize")]
    Overflow { statistic: &'static str },
}

/// A statistic was requested from a sample too small to define it.
///
/// Sample variance needs at least two observations, so a single-value
/// sample yields this error for the variance and the standard deviation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{statistic} needs at least {required} observations, sample has {count}")]
pub struct DegenerateSampleError {
    pub statistic: &'static str,
    pub count: usize,
    pub required: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(InvalidInputError::Empty.to_string(), "sample is empty");
        assert_eq!(
            InvalidInputError::NonFinite {
                index: 2,
                value: f64::NAN
            }
            .to_string(),
            "sample value at index 2 is not finite (NaN)"
        );
        let err = DegenerateSampleError {
            statistic: "variance",
            count: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "variance needs at least 2 observations, sample has 1"
        );
    }
}
