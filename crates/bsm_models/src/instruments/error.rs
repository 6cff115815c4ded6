//! Error types for instrument construction.
//!
//! This module provides:
//! - `InstrumentError`: Errors from validating contract terms and spot inputs

use bsm_core::types::PricingError;
use thiserror::Error;

/// Instrument validation errors.
///
/// Raised by the validated constructors when a contract term would make the
/// closed-form formulas undefined (division by zero or log of a non-positive
/// number).
///
/// # Examples
/// ```
/// use bsm_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Volatility is not strictly positive and finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Time to expiry is not strictly positive and finite.
    #[error("Invalid expiry: τ = {expiry}")]
    InvalidExpiry {
        /// The invalid time to expiry
        expiry: f64,
    },

    /// Strike is not strictly positive and finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Interest rate is not finite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Spot is not strictly positive and finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = InstrumentError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: τ = 0");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = InstrumentError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = InstrumentError::InvalidRate { rate: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid rate: r = NaN");
    }

    #[test]
    fn test_to_pricing_error() {
        let err = InstrumentError::InvalidStrike { strike: 0.0 };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("strike")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
