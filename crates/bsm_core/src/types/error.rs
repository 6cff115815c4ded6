//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Categorised errors surfaced by the valuation layers
//! - `DistributionError`: Domain errors from distribution functions
//! - `AggregationError`: Errors from sequence aggregation helpers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for valuation operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid contract terms or market inputs
/// - `DomainError`: Argument outside the domain of a mathematical function
/// - `LengthMismatch`: Paired sequences of different lengths
///
/// # Examples
/// ```
/// use bsm_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative strike".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative strike");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Argument outside the domain of a function
    DomainError(String),

    /// Paired sequences differ in length
    LengthMismatch(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            PricingError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Distribution function errors.
///
/// # Examples
/// ```
/// use bsm_core::types::DistributionError;
///
/// let err = DistributionError::ProbabilityOutOfRange { probability: 1.0 };
/// assert_eq!(format!("{}", err), "Quantiles should be in (0, 1): p = 1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Probability passed to a quantile function is not strictly inside (0, 1).
    #[error("Quantiles should be in (0, 1): p = {probability}")]
    ProbabilityOutOfRange {
        /// The rejected probability
        probability: f64,
    },
}

/// Aggregation errors.
///
/// # Examples
/// ```
/// use bsm_core::types::AggregationError;
///
/// let err = AggregationError::LengthMismatch { left: 1, right: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Sequences should have the same length: 1 != 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AggregationError {
    /// The two sequences being combined differ in length.
    #[error("Sequences should have the same length: {left} != {right}")]
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },
}

impl From<DistributionError> for PricingError {
    fn from(err: DistributionError) -> Self {
        PricingError::DomainError(err.to_string())
    }
}

impl From<AggregationError> for PricingError {
    fn from(err: AggregationError) -> Self {
        PricingError::LengthMismatch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            format!("{}", PricingError::DomainError("p = 0".to_string())),
            "Domain error: p = 0"
        );
        assert_eq!(
            format!("{}", PricingError::LengthMismatch("2 != 3".to_string())),
            "Length mismatch: 2 != 3"
        );
    }

    #[test]
    fn test_probability_out_of_range_display() {
        let err = DistributionError::ProbabilityOutOfRange { probability: -0.5 };
        assert_eq!(format!("{}", err), "Quantiles should be in (0, 1): p = -0.5");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AggregationError::LengthMismatch { left: 3, right: 2 };
        let _: &dyn std::error::Error = &err;
        let err = DistributionError::ProbabilityOutOfRange { probability: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_distribution_to_pricing_error() {
        let err = DistributionError::ProbabilityOutOfRange { probability: 1.0 };
        match PricingError::from(err) {
            PricingError::DomainError(msg) => assert!(msg.contains("(0, 1)")),
            other => panic!("Expected DomainError, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregation_to_pricing_error() {
        let err = AggregationError::LengthMismatch { left: 1, right: 2 };
        match PricingError::from(err) {
            PricingError::LengthMismatch(msg) => assert!(msg.contains("1 != 2")),
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }
}
