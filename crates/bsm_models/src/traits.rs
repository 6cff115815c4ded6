//! Valuation capability shared by options and strategies.
//!
//! # Design Philosophy
//!
//! Every implementor is an immutable value and every method a pure function
//! of `(self, spot)`. Strategies implement the same trait as single options,
//! so callers never distinguish the two.

use num_traits::Float;

use crate::greeks::Greeks;

/// Closed-form valuation at a spot price.
///
/// # Required Methods
///
/// - [`payoff`](Valuation::payoff) - Terminal payoff if expiry were now
/// - [`price`](Valuation::price) - Present value
/// - [`delta`](Valuation::delta), [`gamma`](Valuation::gamma),
///   [`vega`](Valuation::vega), [`theta`](Valuation::theta),
///   [`rho`](Valuation::rho) - Sensitivities
///
/// # Provided Methods
///
/// - [`greeks`](Valuation::greeks) - All seven measures at one spot
///
/// # Examples
///
/// ```
/// use bsm_models::traits::Valuation;
///
/// struct Cash(f64);
///
/// impl Valuation<f64> for Cash {
///     fn payoff(&self, _spot: f64) -> f64 { self.0 }
///     fn price(&self, _spot: f64) -> f64 { self.0 }
///     fn delta(&self, _spot: f64) -> f64 { 0.0 }
///     fn gamma(&self, _spot: f64) -> f64 { 0.0 }
///     fn vega(&self, _spot: f64) -> f64 { 0.0 }
///     fn theta(&self, _spot: f64) -> f64 { 0.0 }
///     fn rho(&self, _spot: f64) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Cash(5.0).greeks(100.0).price, 5.0);
/// ```
pub trait Valuation<T: Float> {
    /// Terminal payoff at the given spot.
    fn payoff(&self, spot: T) -> T;

    /// Present value.
    fn price(&self, spot: T) -> T;

    /// First derivative of price with respect to spot.
    fn delta(&self, spot: T) -> T;

    /// Second derivative of price with respect to spot.
    fn gamma(&self, spot: T) -> T;

    /// Derivative of price with respect to volatility.
    fn vega(&self, spot: T) -> T;

    /// Time decay ∂V/∂τ, value lost per year as expiry approaches.
    fn theta(&self, spot: T) -> T;

    /// Derivative of price with respect to the interest rate.
    fn rho(&self, spot: T) -> T;

    /// Computes every measure at one spot.
    fn greeks(&self, spot: T) -> Greeks<T> {
        Greeks {
            payoff: self.payoff(spot),
            price: self.price(spot),
            delta: self.delta(spot),
            gamma: self.gamma(spot),
            vega: self.vega(spot),
            theta: self.theta(spot),
            rho: self.rho(spot),
        }
    }
}

/// Selector for one valuation measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Measure {
    /// Terminal payoff.
    Payoff,
    /// Present value.
    Price,
    /// ∂V/∂S.
    Delta,
    /// ∂²V/∂S².
    Gamma,
    /// ∂V/∂σ.
    Vega,
    /// Time decay.
    Theta,
    /// ∂V/∂r.
    Rho,
}

impl Measure {
    /// All measures in reporting order.
    pub const ALL: [Measure; 7] = [
        Measure::Payoff,
        Measure::Price,
        Measure::Delta,
        Measure::Gamma,
        Measure::Vega,
        Measure::Theta,
        Measure::Rho,
    ];

    /// Evaluates this measure on `valuation` at `spot`.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::instruments::VanillaOption;
    /// use bsm_models::traits::{Measure, Valuation};
    ///
    /// let call = VanillaOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
    /// assert_eq!(Measure::Vega.evaluate(&call, 100.0), call.vega(100.0));
    /// ```
    #[inline]
    pub fn evaluate<T: Float, V: Valuation<T> + ?Sized>(self, valuation: &V, spot: T) -> T {
        match self {
            Measure::Payoff => valuation.payoff(spot),
            Measure::Price => valuation.price(spot),
            Measure::Delta => valuation.delta(spot),
            Measure::Gamma => valuation.gamma(spot),
            Measure::Vega => valuation.vega(spot),
            Measure::Theta => valuation.theta(spot),
            Measure::Rho => valuation.rho(spot),
        }
    }

    /// Returns the lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Payoff => "payoff",
            Measure::Price => "price",
            Measure::Delta => "delta",
            Measure::Gamma => "gamma",
            Measure::Vega => "vega",
            Measure::Theta => "theta",
            Measure::Rho => "rho",
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
