//! Closed-form formulas for cash-or-nothing digital options.
//!
//! A digital call pays 1 if `S >= K` at expiry, a digital put pays 1 if
//! `S < K`; the boundary case is paid to the call only.
//!
//! With call flag c = ±1 and D = e^(-rτ):
//!
//! **Price**: D·Φ(c·d₂)
//! **Delta**: c·D·φ(d₂) / (S·σ·√τ)
//! **Gamma**: -c·D·d₁·φ(d₂) / ((S·σ)²·τ)
//! **Vega**: -c·D·d₁·φ(d₂) / σ
//! **Theta**: -D·(c·φ(d₂)·(ln(S/K) - (r - σ²/2)τ) / (2στ√τ) + r·Φ(c·d₂))
//! **Rho**: D·((c·√τ/σ)·φ(d₂) - τ·Φ(c·d₂))
//!
//! Theta is ∂V/∂τ, the same convention as the vanilla formulas: value lost per
//! year as expiry approaches.

use bsm_core::math::distributions::{norm_cdf, norm_pdf};
use num_traits::Float;

use crate::instruments::OptionContract;

/// Terminal payoff: 1 if in the money, else 0.
#[inline]
pub fn payoff<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let in_the_money = if contract.is_call() {
        spot >= contract.strike()
    } else {
        spot < contract.strike()
    };

    if in_the_money {
        T::one()
    } else {
        T::zero()
    }
}

/// Present value of the unit cash payment.
///
/// # Examples
/// ```
/// use bsm_models::analytical::digital;
/// use bsm_models::instruments::OptionContract;
///
/// let call = OptionContract::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
/// let put = OptionContract::new(0.8_f64, 0.1, 0.5, 110.0, false).unwrap();
///
/// // A digital call and put on the same strike pay 1 in every state
/// let total = digital::price(&call, 100.0) + digital::price(&put, 100.0);
/// assert!((total - call.discount_factor()).abs() < 1e-12);
/// ```
#[inline]
pub fn price<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (_, d2) = contract.d1_d2(spot);
    contract.discount_factor() * norm_cdf(contract.call_flag() * d2)
}

/// Delta (∂V/∂S).
#[inline]
pub fn delta<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (_, d2) = contract.d1_d2(spot);
    let scale = (contract.call_flag() * contract.discount_factor())
        / (spot * contract.volatility() * contract.expiry().sqrt());

    scale * norm_pdf(d2)
}

/// Gamma (∂²V/∂S²).
#[inline]
pub fn gamma<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, d2) = contract.d1_d2(spot);
    let spot_vol = spot * contract.volatility();
    let scale = (-contract.call_flag() * contract.discount_factor())
        / (spot_vol * spot_vol * contract.expiry());

    scale * d1 * norm_pdf(d2)
}

/// Vega (∂V/∂σ).
#[inline]
pub fn vega<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (d1, d2) = contract.d1_d2(spot);
    let scale = (-contract.call_flag() * contract.discount_factor()) / contract.volatility();

    scale * d1 * norm_pdf(d2)
}

/// Theta, as value lost per unit time (∂V/∂τ).
#[inline]
pub fn theta<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (_, d2) = contract.d1_d2(spot);
    let c = contract.call_flag();
    let vol = contract.volatility();
    let rate = contract.rate();
    let expiry = contract.expiry();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();

    let log_moneyness = (spot / contract.strike()).ln();
    let drift = (rate - half * vol * vol) * expiry;
    let density_term =
        (c * norm_pdf(d2) * (log_moneyness - drift)) / (two * vol * expiry * expiry.sqrt());

    -contract.discount_factor() * (density_term + rate * norm_cdf(c * d2))
}

/// Rho (∂V/∂r).
#[inline]
pub fn rho<T: Float>(contract: &OptionContract<T>, spot: T) -> T {
    let (_, d2) = contract.d1_d2(spot);
    let c = contract.call_flag();
    let expiry = contract.expiry();

    contract.discount_factor()
        * ((c * expiry.sqrt() / contract.volatility()) * norm_pdf(d2)
            - expiry * norm_cdf(c * d2))
}
