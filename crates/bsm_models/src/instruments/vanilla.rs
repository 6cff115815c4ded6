//! Vanilla European option.

use num_traits::Float;

use super::contract::OptionContract;
use super::error::InstrumentError;
use crate::analytical::vanilla;
use crate::traits::Valuation;

/// European call or put valued with the Black-Scholes-Merton formula.
///
/// # Examples
/// ```
/// use bsm_models::instruments::VanillaOption;
/// use bsm_models::traits::Valuation;
///
/// let put = VanillaOption::new(0.8_f64, 0.1, 0.5, 90.0, false).unwrap();
/// assert!((put.price(100.0) - 14.225596).abs() < 1e-4);
/// assert!((put.delta(100.0) + 0.288598).abs() < 1e-4);
/// assert_eq!(put.payoff(85.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption<T: Float> {
    contract: OptionContract<T>,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a validated vanilla option.
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

    /// Creates a vanilla option without validating its terms.
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

impl<T: Float> Valuation<T> for VanillaOption<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        vanilla::payoff(&self.contract, spot)
    }

    #[inline]
    fn price(&self, spot: T) -> T {
        vanilla::price(&self.contract, spot)
    }

    #[inline]
    fn delta(&self, spot: T) -> T {
        vanilla::delta(&self.contract, spot)
    }

    #[inline]
    fn gamma(&self, spot: T) -> T {
        vanilla::gamma(&self.contract, spot)
    }

    #[inline]
    fn vega(&self, spot: T) -> T {
        vanilla::vega(&self.contract, spot)
    }

    #[inline]
    fn theta(&self, spot: T) -> T {
        vanilla::theta(&self.contract, spot)
    }

    #[inline]
    fn rho(&self, spot: T) -> T {
        vanilla::rho(&self.contract, spot)
    }
}
