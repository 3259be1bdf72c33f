//! Error types for generator construction and sampling.
//!
//! This module provides:
//! - `RngError`: caller-contract violations detected by the generators

use thiserror::Error;

/// Generator errors.
///
/// Every variant is a caller-contract violation; none is recoverable by
/// retrying with the same inputs.
///
/// # Variants
/// - `InvalidRange`: bounds passed to uniform sampling are out of order or empty
/// - `EmptyWeights`: weighted generator built from an empty sequence
/// - `InvalidWeight`: a weight is negative, NaN or infinite
/// - `WeightOverflow`: the weights cannot be summed in their own type
/// - `ZeroTotalWeight`: every weight is zero
/// - `InvalidSeed`: a seed specification could not be parsed
///
/// # Examples
/// ```
/// use util_rng::RngError;
///
/// let err = RngError::InvalidWeight { index: 2 };
/// assert_eq!(format!("{}", err), "Invalid weight at index 2: must be finite and non-negative");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RngError {
    /// Uniform sampling bounds do not describe a non-empty interval.
    #[error("Invalid range: [{min}, {max}] is empty")]
    InvalidRange {
        /// Lower bound, formatted with `Debug`
        min: String,
        /// Upper bound, formatted with `Debug`
        max: String,
    },

    /// No weights were supplied.
    #[error("Weight sequence is empty")]
    EmptyWeights,

    /// A weight is negative or not a finite number.
    #[error("Invalid weight at index {index}: must be finite and non-negative")]
    InvalidWeight {
        /// Position of the offending weight
        index: usize,
    },

    /// Summing the weights overflowed the weight type.
    #[error("Weight sum overflows the weight type")]
    WeightOverflow,

    /// All weights are zero, so no index can be drawn.
    #[error("All weights are zero")]
    ZeroTotalWeight,

    /// A seed specification string is malformed.
    #[error("Invalid seed: {0}. Expected one of: clock, u32:<n>, u64:<n>")]
    InvalidSeed(String),
}

impl RngError {
    /// Builds an `InvalidRange` error from a pair of bounds.
    pub(crate) fn invalid_range<U: std::fmt::Debug>(min: U, max: U) -> Self {
        RngError::InvalidRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = RngError::invalid_range(10_i32, 3_i32);
        assert_eq!(format!("{}", err), "Invalid range: [10, 3] is empty");
    }

    #[test]
    fn test_invalid_range_keeps_float_formatting() {
        let err = RngError::invalid_range(1.0_f64, 1.0_f64);
        assert_eq!(
            err,
            RngError::InvalidRange {
                min: "1.0".to_string(),
                max: "1.0".to_string(),
            }
        );
    }

    #[test]
    fn test_weight_errors_display() {
        assert_eq!(format!("{}", RngError::EmptyWeights), "Weight sequence is empty");
        assert_eq!(format!("{}", RngError::ZeroTotalWeight), "All weights are zero");
        assert!(format!("{}", RngError::WeightOverflow).contains("overflows"));
    }

    #[test]
    fn test_invalid_seed_display() {
        let err = RngError::InvalidSeed("u16:4".to_string());
        assert!(format!("{}", err).starts_with("Invalid seed: u16:4."));
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(RngError::EmptyWeights);
        assert_eq!(err.to_string(), "Weight sequence is empty");
    }
}
