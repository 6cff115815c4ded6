//! Black-Scholes-Merton formulas for vanilla European options.
//!
//! With call flag c = ±1, Φ the standard normal CDF and φ its density:
//!
//! **Payoff**: max(0, c·(S - K))
//! **Price**: c·(S·Φ(c·d₁) - K·e^(-rτ)·Φ(c·d₂))
//! **Delta**: Φ(d₁) for a call, Φ(d₁) - 1 for a put
//! **Gamma**: φ(d₁) / (S·σ·√τ)
//! **Vega**: S·φ(d₁)·√τ
//! **Theta**: S·φ(d₁)·σ / (2√τ) + c·r·K·e^(-rτ)·Φ(c·d₂)
//! **Rho**: c·K·τ·e^(-rτ)·Φ(c·d₂)
//!
//! Theta is reported as value lost per year as expiry approaches, so it is
//! positive for a typical long option.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};
use num_traits::Float;

use crate::instruments::OptionContract;

/// Terminal payoff `max(0, c·(S - K))`.
#[inline]
pub fn payoff<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    ((spot - contract.strike()) * contract.call_flag()).max(T::zero())
}

/// Present value.
///
/// # Examples
/// ```
/// use bsm_models::analytical::vanilla;
/// use bsm_models::instruments::OptionContract;
///
/// let contract = OptionContract::new(0.2_f64, 0.05, 1.0, 100.0, true).unwrap();
/// // S=100, K=100, r=0.05, σ=0.2, T=1 ≈ 10.4506
/// assert!((vanilla::price(&contract, 100.0) - 10.4506).abs() < 1e-3);
/// ```
#[inline]
pub fn price<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, d2) = contract.d1_d2(spot);
    let c = contract.call_flag();

    c * (spot * norm_cdf(c * d1)
        - contract.discount_factor() * contract.strike() * norm_cdf(c * d2))
}

/// Delta (∂V/∂S).
#[inline]
pub fn delta<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, _) = contract.d1_d2(spot);
    let n_d1 = norm_cdf(d1);

    if contract.is_call() {
        n_d1
    } else {
        n_d1 - T::one()
    }
}

/// Gamma (∂²V/∂S²), identical for calls and puts.
#[inline]
pub fn gamma<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, _) = contract.d1_d2(spot);
    norm_pdf(d1) / (spot * contract.volatility() * contract.expiry().sqrt())
}

/// Vega (∂V/∂σ), identical for calls and puts.
#[inline]
pub fn vega<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, _) = contract.d1_d2(spot);
    spot * norm_pdf(d1) * contract.expiry().sqrt()
}

/// Theta, as value lost per unit time (∂V/∂τ).
#[inline]
pub fn theta<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, d2) = contract.d1_d2(spot);
    let c = contract.call_flag();
    let two = T::from(2.0).unwrap();

    // Calendar-time derivative, negated
    let decay = (-spot * norm_pdf(d1) * contract.volatility()) / (two * contract.expiry().sqrt());
    let carry = c
        * contract.rate()
        * contract.strike()
        * contract.discount_factor()
        * norm_cdf(c * d2);

    -(decay - carry)
}

/// Rho (∂V/∂r).
#[inline]
pub fn rho<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (_, d2) = contract.d1_d2(spot);
    let c = contract.call_flag();

    c * contract.strike() * contract.expiry() * contract.discount_factor() * norm_cdf(c * d2)
}
