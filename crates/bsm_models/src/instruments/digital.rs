//! Cash-or-nothing digital option.

use num_traits::Float;

use super::contract::OptionContract;
use super::error::InstrumentError;
use crate::analytical::digital;
use crate::traits::Valuation;

/// Cash-or-nothing option paying 1 at expiry when in the money.
///
/// # Examples
/// ```
/// use bsm_models::instruments::DigitalOption;
/// use bsm_models::traits::Valuation;
///
/// let put = DigitalOption::new(0.8_f64, 0.1, 0.5, 90.0, false).unwrap();
/// assert!((put.price(100.0) - 0.478727).abs() < 1e-4);
/// assert_eq!(put.payoff(85.0), 1.0);
/// assert_eq!(put.payoff(90.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitalOption<T: Float> {
    contract: OptionContract<T>,
}

impl<T: Float> DigitalOption<T> {
    /// Creates a validated digital option.
    ///
    /// # Errors
    /// Returns `InstrumentError` if volatility, expiry or strike is not
    /// strictly positive, or the rate is not finite.
    pub fn new(
        volatility: T,
        rate: T,
        expiry: T,
        strike: T,
        is_call: bool,
    ) -> Result<Self, InstrumentError> {
        OptionContract::new(volatility, rate, expiry, strike, is_call).map(Self::from_contract)
    }

    /// Creates a digital option without validating its terms.
    #[inline]
    pub fn new_unchecked(volatility: T, rate: T, expiry: T, strike: T, is_call: bool) -> Self {
        Self::from_contract(OptionContract::new_unchecked(
            volatility, rate, expiry, strike, is_call,
        ))
    }

    /// Wraps existing contract terms.
    #[inline]
    pub fn from_contract(contract: OptionContract<T>) -> Self {
        Self { contract }
    }

    /// Returns the contract terms.
    #[inline]
    pub fn contract(&self) -> &OptionContract<T> {
        &self.contract
    }
}

impl<T: Float> Valuation<T> for DigitalOption<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        digital::payoff(&self.contract, spot)
    }

    #[inline]
    fn price(&self, spot: T) -> T {
        digital::price(&self.contract, spot)
    }

    #[inline]
    fn delta(&self, spot: T) -> T {
        digital::delta(&self.contract, spot)
    }

    #[inline]
    fn gamma(&self, spot: T) -> T {
        digital::gamma(&self.contract, spot)
    }

    #[inline]
    fn vega(&self, spot: T) -> T {
        digital::vega(&self.contract, spot)
    }

    #[inline]
    fn theta(&self, spot: T) -> T {
        digital::theta(&self.contract, spot)
    }

    #[inline]
    fn rho(&self, spot: T) -> T {
        digital::rho(&self.contract, spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_formulas() {
        let option = DigitalOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
        let contract = *option.contract();
        for spot in [90.0, 110.0, 130.0] {
            assert_eq!(option.payoff(spot), digital::payoff(&contract, spot));
            assert_eq!(option.gamma(spot), digital::gamma(&contract, spot));
            assert_eq!(option.vega(spot), digital::vega(&contract, spot));
        }
    }

    #[test]
    fn test_new_rejects_invalid_terms() {
        assert!(matches!(
            DigitalOption::new(-0.8_f64, 0.1, 0.5, 110.0, true),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
        assert!(DigitalOption::new(0.8_f64, f64::INFINITY, 0.5, 110.0, true).is_err());
    }

    #[test]
    fn test_price_bounded_by_discount_factor() {
        let option = DigitalOption::new(0.25_f64, 0.05, 2.0, 100.0, true).unwrap();
        let df = option.contract().discount_factor();
        for spot in [1.0, 50.0, 100.0, 200.0, 10_000.0] {
            let value = option.price(spot);
            assert!((0.0..=df).contains(&value), "price {} at spot {}", value, spot);
        }
    }
}
