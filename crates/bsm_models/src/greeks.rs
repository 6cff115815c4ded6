//! Snapshot of every valuation measure at one spot.

use std::ops::Add;

use num_traits::Float;

use crate::traits::Measure;

/// Payoff, price and Greeks computed at one spot.
///
/// Snapshots combine linearly: the snapshot of a weighted portfolio equals
/// the weighted sum of its legs' snapshots.
///
/// # Examples
/// ```
/// use bsm_models::instruments::VanillaOption;
/// use bsm_models::traits::Valuation;
///
/// let put = VanillaOption::new(0.8_f64, 0.1, 0.5, 100.0, false).unwrap();
/// let call = VanillaOption::new(0.8_f64, 0.1, 0.5, 100.0, true).unwrap();
///
/// let combined = put.greeks(100.0) + call.greeks(100.0);
/// assert_eq!(combined.price, put.price(100.0) + call.price(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// Terminal payoff.
    pub payoff: T,
    /// Present value.
    pub price: T,
    /// ∂V/∂S.
    pub delta: T,
    /// ∂²V/∂S².
    pub gamma: T,
    /// ∂V/∂σ.
    pub vega: T,
    /// Time decay.
    pub theta: T,
    /// ∂V/∂r.
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All-zero snapshot, the identity for `+`.
    pub fn zero() -> Self {
        Self {
            payoff: T::zero(),
            price: T::zero(),
            delta: T::zero(),
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }

    /// Multiplies every measure by `weight`.
    pub fn scale(self, weight: T) -> Self {
        Self {
            payoff: self.payoff * weight,
            price: self.price * weight,
            delta: self.delta * weight,
            gamma: self.gamma * weight,
            vega: self.vega * weight,
            theta: self.theta * weight,
            rho: self.rho * weight,
        }
    }

    /// Returns the value of one measure.
    #[inline]
    pub fn get(&self, measure: Measure) -> T {
        match measure {
            Measure::Payoff => self.payoff,
            Measure::Price => self.price,
            Measure::Delta => self.delta,
            Measure::Gamma => self.gamma,
            Measure::Vega => self.vega,
            Measure::Theta => self.theta,
            Measure::Rho => self.rho,
        }
    }
}

impl<T: Float> Add for Greeks<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            payoff: self.payoff + rhs.payoff,
            price: self.price + rhs.price,
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            vega: self.vega + rhs.vega,
            theta: self.theta + rhs.theta,
            rho: self.rho + rhs.rho,
        }
    }
}
