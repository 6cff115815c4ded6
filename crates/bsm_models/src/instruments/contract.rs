//! European option contract terms.
//!
//! This module provides the immutable contract shared by every option
//! variant, together with the `d1`/`d2` terms of the Black-Scholes-Merton
//! formulas.

use num_traits::Float;

use super::error::InstrumentError;

/// Immutable terms of a European option contract.
///
/// Spot is never stored: every valuation takes it as a per-call input and
/// recomputes `d1`/`d2`.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use bsm_models::instruments::OptionContract;
///
/// let contract = OptionContract::new(0.2_f64, 0.05, 1.0, 100.0, true).unwrap();
/// assert_eq!(contract.call_flag(), 1.0);
///
/// let (d1, d2) = contract.d1_d2(100.0);
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    volatility: T,
    rate: T,
    expiry: T,
    strike: T,
    is_call: bool,
}

impl<T: Float> OptionContract<T> {
    /// Creates validated contract terms.
    ///
    /// # Arguments
    /// * `volatility` - Annualised implied volatility σ (must be positive)
    /// * `rate` - Continuously compounded risk-free rate r (any finite value)
    /// * `expiry` - Time to expiry τ in years (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `is_call` - `true` for a call, `false` for a put
    ///
    /// # Errors
    /// - `InstrumentError::InvalidVolatility` if σ <= 0 or not finite
    /// - `InstrumentError::InvalidRate` if r is not finite
    /// - `InstrumentError::InvalidExpiry` if τ <= 0 or not finite
    /// - `InstrumentError::InvalidStrike` if K <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use bsm_models::instruments::OptionContract;
    ///
    /// assert!(OptionContract::new(0.2_f64, -0.01, 1.0, 100.0, false).is_ok());
    /// assert!(OptionContract::new(0.0_f64, 0.05, 1.0, 100.0, true).is_err());
    /// assert!(OptionContract::new(0.2_f64, 0.05, 1.0, -5.0, true).is_err());
    /// ```
    pub fn new(
        volatility: T,
        rate: T,
        expiry: T,
        strike: T,
        is_call: bool,
    ) -> Result<Self, InstrumentError> {
        if !is_positive(volatility) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidRate {
                rate: to_f64(rate),
            });
        }

        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: to_f64(expiry),
            });
        }

        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: to_f64(strike),
            });
        }

        Ok(Self::new_unchecked(volatility, rate, expiry, strike, is_call))
    }

    /// Creates contract terms without validation.
    ///
    /// The caller must guarantee σ, τ and K are strictly positive; otherwise
    /// every formula silently returns NaN or infinity.
    #[inline]
    pub fn new_unchecked(volatility: T, rate: T, expiry: T, strike: T, is_call: bool) -> Self {
        Self {
            volatility,
            rate,
            expiry,
            strike,
            is_call,
        }
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the time to expiry τ in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.is_call
    }

    /// Returns `+1` for a call and `-1` for a put.
    ///
    /// Folds call/put symmetry into a sign multiplier so formulas do not
    /// branch per Greek.
    #[inline]
    pub fn call_flag(&self) -> T {
        if self.is_call {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Returns σ·√τ.
    #[inline]
    pub fn sqrt_term_vol(&self) -> T {
        self.volatility * self.expiry.sqrt()
    }

    /// Returns the discount factor e^(-rτ).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Computes `(d1, d2)` for the given spot.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)τ) / (σ√τ), d₂ = d₁ - σ√τ
    #[inline]
    pub fn d1_d2(&self, spot: T) -> (T, T) {
        let half = T::from(0.5).unwrap();
        let sqrt_term_vol = self.sqrt_term_vol();

        let log_moneyness = (spot / self.strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * self.expiry;
        let d1 = (log_moneyness + drift) / sqrt_term_vol;

        (d1, d1 - sqrt_term_vol)
    }
}

/// Validates a spot price.
///
/// Valuation methods never check their spot argument; callers taking spots
/// from untrusted input can run them through this first.
///
/// # Errors
/// `InstrumentError::InvalidSpot` if the spot is not strictly positive and finite.
///
/// # Examples
/// ```
/// use bsm_models::instruments::validate_spot;
///
/// assert_eq!(validate_spot(100.0_f64), Ok(100.0));
/// assert!(validate_spot(0.0_f64).is_err());
/// ```
pub fn validate_spot<T: Float>(spot: T) -> Result<T, InstrumentError> {
    if is_positive(spot) {
        Ok(spot)
    } else {
        Err(InstrumentError::InvalidSpot { spot: to_f64(spot) })
    }
}

#[inline]
fn is_positive<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
