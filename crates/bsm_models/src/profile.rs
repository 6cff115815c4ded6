//! Spot-ladder profiles evaluated in parallel.
//!
//! Every valuation is a pure function of `(entity, spot)`, so a ladder of
//! spots is evaluated with Rayon without any locking.

use bsm_core::types::PricingError;
use num_traits::Float;
use rayon::prelude::*;
use thiserror::Error;

use crate::greeks::Greeks;
use crate::traits::Valuation;

/// Spot-ladder construction errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// Ladder parameters cannot produce strictly positive spots.
    #[error("Invalid spot ladder: {0}")]
    InvalidLadder(String),
}

impl From<ProfileError> for PricingError {
    fn from(err: ProfileError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Greeks snapshot at one ladder spot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint<T> {
    /// Spot price.
    pub spot: T,
    /// Measures at `spot`.
    pub greeks: Greeks<T>,
}

/// Builds `steps` evenly spaced spots over `[center - half_width, center + half_width]`.
///
/// A single step yields `[center]`.
///
/// # Errors
/// `ProfileError::InvalidLadder` if `steps` is zero, `center` is not
/// strictly positive, `half_width` is negative, or the lowest spot would not
/// be strictly positive.
///
/// # Examples
/// ```
/// use bsm_models::profile::spot_ladder;
///
/// let spots = spot_ladder(100.0_f64, 20.0, 5).unwrap();
/// assert_eq!(spots, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
/// assert!(spot_ladder(100.0_f64, 100.0, 5).is_err());
/// ```
pub fn spot_ladder<T: Float>(
    center: T,
    half_width: T,
    steps: usize,
) -> Result<Vec<T>, ProfileError> {
    if steps == 0 {
        return Err(ProfileError::InvalidLadder(
            "at least one step is required".to_string(),
        ));
    }

    if !(center.is_finite() && center > T::zero()) {
        return Err(ProfileError::InvalidLadder(
            "center spot should be strictly positive".to_string(),
        ));
    }

    if !(half_width.is_finite() && half_width >= T::zero()) {
        return Err(ProfileError::InvalidLadder(
            "half width should be non-negative".to_string(),
        ));
    }

    let lowest = center - half_width;
    if lowest <= T::zero() {
        return Err(ProfileError::InvalidLadder(
            "lowest spot should be strictly positive".to_string(),
        ));
    }

    if steps == 1 {
        return Ok(vec![center]);
    }

    let two = T::from(2.0).unwrap();
    let intervals = T::from(steps - 1).unwrap();
    let increment = two * half_width / intervals;

    Ok((0..steps)
        .map(|i| lowest + increment * T::from(i).unwrap())
        .collect())
}

/// Evaluates every measure at each spot, in parallel.
///
/// Output order matches `spots`.
///
/// # Examples
/// ```
/// use bsm_models::instruments::VanillaOption;
/// use bsm_models::profile::{evaluate_profile, spot_ladder};
/// use bsm_models::traits::Valuation;
///
/// let call = VanillaOption::new(0.2_f64, 0.05, 1.0, 100.0, true).unwrap();
/// let spots = spot_ladder(100.0, 10.0, 3).unwrap();
/// let profile = evaluate_profile(&call, &spots);
///
/// assert_eq!(profile.len(), 3);
/// assert_eq!(profile[1].greeks.price, call.price(100.0));
/// ```
pub fn evaluate_profile<T, V>(valuation: &V, spots: &[T]) -> Vec<ProfilePoint<T>>
where
    T: Float + Send + Sync,
    V: Valuation<T> + Sync + ?Sized,
{
    spots
        .par_iter()
        .map(|&spot| ProfilePoint {
            spot,
            greeks: valuation.greeks(spot),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{DigitalOption, VanillaOption};
    use crate::strategies::Strategy;
    use approx::assert_relative_eq;

    #[test]
    fn test_spot_ladder_endpoints() {
        let spots = spot_ladder(100.0_f64, 25.0, 11).unwrap();
        assert_eq!(spots.len(), 11);
        assert_relative_eq!(spots[0], 75.0, epsilon = 1e-12);
        assert_relative_eq!(spots[5], 100.0, epsilon = 1e-12);
        assert_relative_eq!(spots[10], 125.0, epsilon = 1e-12);
        assert!(spots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_spot_ladder_single_step() {
        assert_eq!(spot_ladder(42.0_f64, 10.0, 1).unwrap(), vec![42.0]);
    }

    #[test]
    fn test_spot_ladder_zero_width() {
        assert_eq!(spot_ladder(42.0_f64, 0.0, 3).unwrap(), vec![42.0; 3]);
    }

    #[test]
    fn test_spot_ladder_invalid() {
        assert!(spot_ladder(100.0_f64, 10.0, 0).is_err());
        assert!(spot_ladder(-100.0_f64, 10.0, 5).is_err());
        assert!(spot_ladder(100.0_f64, -10.0, 5).is_err());
        assert!(spot_ladder(100.0_f64, 150.0, 5).is_err());
        assert!(spot_ladder(f64::NAN, 10.0, 5).is_err());
    }

    #[test]
    fn test_invalid_ladder_message() {
        let err = spot_ladder(100.0_f64, 10.0, 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid spot ladder: at least one step is required");
        assert!(matches!(PricingError::from(err), PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_profile_matches_sequential() {
        let digital = DigitalOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
        let spots = spot_ladder(100.0, 40.0, 81).unwrap();
        let profile = evaluate_profile(&digital, &spots);

        for (point, &spot) in profile.iter().zip(&spots) {
            assert_eq!(point.spot, spot);
            assert_eq!(point.greeks, digital.greeks(spot));
        }
    }

    #[test]
    fn test_profile_of_strategy() {
        let straddle = Strategy::straddle(0.3_f64, 0.05, 1.0, 100.0).unwrap();
        let spots = spot_ladder(100.0, 50.0, 3).unwrap();
        let profile = evaluate_profile(&straddle, &spots);
        // Straddle payoff is |S - K|
        assert_eq!(profile[0].greeks.payoff, 50.0);
        assert_eq!(profile[1].greeks.payoff, 0.0);
        assert_eq!(profile[2].greeks.payoff, 50.0);
        let call = VanillaOption::new(0.3_f64, 0.05, 1.0, 100.0, true).unwrap();
        assert!(profile[2].greeks.price > call.price(150.0));
    }
}
