//! Strategy classification and named constructors.

use num_traits::Float;

use super::strategy::{Strategy, StrategyLeg};
use crate::instruments::{InstrumentError, VanillaOption};

/// Strategy classification used for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    /// Long put and long call at one strike.
    Straddle,
    /// Long put and long call at two strikes.
    Strangle,
    /// Opposite positions in two same-type options.
    Spread,
    /// Opposite positions in a put and a call.
    RiskReversal,
    /// Long wings, two short bodies.
    Butterfly,
    /// Arbitrary user-supplied legs.
    Custom,
}

impl StrategyKind {
    /// Returns the kebab-case display name.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Straddle => "straddle",
            StrategyKind::Strangle => "strangle",
            StrategyKind::Spread => "spread",
            StrategyKind::RiskReversal => "risk-reversal",
            StrategyKind::Butterfly => "butterfly",
            StrategyKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Market view of a directional strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Profits when spot rises.
    #[default]
    Bullish,
    /// Profits when spot falls.
    Bearish,
}

impl Direction {
    /// Returns `+1` for bullish and `-1` for bearish.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Bullish => T::one(),
            Direction::Bearish => -T::one(),
        }
    }
}

impl<T: Float> Strategy<T, 2> {
    /// Long put and long call at the same strike.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any contract term is invalid.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::strategies::{Strategy, StrategyKind};
    /// use bsm_models::traits::Valuation;
    ///
    /// let straddle = Strategy::straddle(0.8_f64, 0.1, 0.5, 100.0).unwrap();
    /// assert_eq!(straddle.kind(), StrategyKind::Straddle);
    /// assert_eq!(straddle.payoff(90.0), 10.0);
    /// assert_eq!(straddle.payoff(115.0), 15.0);
    /// ```
    pub fn straddle(volatility: T, rate: T, expiry: T, strike: T) -> Result<Self, InstrumentError> {
        let put = VanillaOption::new(volatility, rate, expiry, strike, false)?;
        let call = VanillaOption::new(volatility, rate, expiry, strike, true)?;

        Ok(Self::with_kind(
            StrategyKind::Straddle,
            [StrategyLeg::long(put), StrategyLeg::long(call)],
        ))
    }

    /// Long put at `strikes[0]` and long call at `strikes[1]`.
    ///
    /// `strikes[0] < strikes[1]` is the usual shape but is not enforced.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any contract term is invalid.
    pub fn strangle(
        volatilities: [T; 2],
        rate: T,
        expiry: T,
        strikes: [T; 2],
    ) -> Result<Self, InstrumentError> {
        let put = VanillaOption::new(volatilities[0], rate, expiry, strikes[0], false)?;
        let call = VanillaOption::new(volatilities[1], rate, expiry, strikes[1], true)?;

        Ok(Self::with_kind(
            StrategyKind::Strangle,
            [StrategyLeg::long(put), StrategyLeg::long(call)],
        ))
    }

    /// Two same-type options at `strikes[0]` and `strikes[1]`.
    ///
    /// Bullish is long the first leg and short the second; bearish is the
    /// reverse.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any contract term is invalid.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::strategies::{Direction, Strategy};
    /// use bsm_models::traits::Valuation;
    ///
    /// let bull_call = Strategy::spread([0.3_f64, 0.3], 0.05, 1.0, [90.0, 110.0], true, Direction::Bullish)
    ///     .unwrap();
    /// // Payoff is capped at the strike gap
    /// assert_eq!(bull_call.payoff(150.0), 20.0);
    /// assert_eq!(bull_call.payoff(80.0), 0.0);
    /// ```
    pub fn spread(
        volatilities: [T; 2],
        rate: T,
        expiry: T,
        strikes: [T; 2],
        is_call: bool,
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        let lower = VanillaOption::new(volatilities[0], rate, expiry, strikes[0], is_call)?;
        let upper = VanillaOption::new(volatilities[1], rate, expiry, strikes[1], is_call)?;
        let sign = direction.sign::<T>();

        Ok(Self::with_kind(
            StrategyKind::Spread,
            [StrategyLeg::new(lower, sign), StrategyLeg::new(upper, -sign)],
        ))
    }

    /// Put at `strikes[0]` against a call at `strikes[1]`.
    ///
    /// Bullish is short the put and long the call; bearish is the reverse.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any contract term is invalid.
    pub fn risk_reversal(
        volatilities: [T; 2],
        rate: T,
        expiry: T,
        strikes: [T; 2],
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        let put = VanillaOption::new(volatilities[0], rate, expiry, strikes[0], false)?;
        let call = VanillaOption::new(volatilities[1], rate, expiry, strikes[1], true)?;
        let sign = direction.sign::<T>();

        Ok(Self::with_kind(
            StrategyKind::RiskReversal,
            [StrategyLeg::new(put, -sign), StrategyLeg::new(call, sign)],
        ))
    }
}

impl<T: Float> Strategy<T, 3> {
    /// Long the wings at `strikes[0]` and `strikes[2]`, short two at `strikes[1]`.
    ///
    /// # Errors
    /// Returns `InstrumentError` if any contract term is invalid.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::strategies::Strategy;
    /// use bsm_models::traits::Valuation;
    ///
    /// let fly = Strategy::butterfly([0.3_f64; 3], 0.05, 1.0, [90.0, 100.0, 110.0], true).unwrap();
    /// assert_eq!(fly.payoff(100.0), 10.0);
    /// assert_eq!(fly.payoff(120.0), 0.0);
    /// assert!(fly.price(100.0) > 0.0);
    /// ```
    pub fn butterfly(
        volatilities: [T; 3],
        rate: T,
        expiry: T,
        strikes: [T; 3],
        is_call: bool,
    ) -> Result<Self, InstrumentError> {
        let two = T::from(2.0).unwrap();
        let lower = VanillaOption::new(volatilities[0], rate, expiry, strikes[0], is_call)?;
        let body = VanillaOption::new(volatilities[1], rate, expiry, strikes[1], is_call)?;
        let upper = VanillaOption::new(volatilities[2], rate, expiry, strikes[2], is_call)?;

        Ok(Self::with_kind(
            StrategyKind::Butterfly,
            [
                StrategyLeg::long(lower),
                StrategyLeg::new(body, -two),
                StrategyLeg::long(upper),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Bullish.sign::<f64>(), 1.0);
        assert_eq!(Direction::Bearish.sign::<f64>(), -1.0);
        assert_eq!(Direction::default(), Direction::Bullish);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StrategyKind::RiskReversal.to_string(), "risk-reversal");
        assert_eq!(StrategyKind::Butterfly.name(), "butterfly");
    }

    #[test]
    fn test_straddle_legs() {
        let straddle = Strategy::straddle(0.8_f64, 0.1, 0.5, 100.0).unwrap();
        let legs = straddle.legs();
        assert!(!legs[0].option.contract().is_call());
        assert!(legs[1].option.contract().is_call());
        assert_eq!(legs[0].weight, 1.0);
        assert_eq!(legs[1].weight, 1.0);
    }

    #[test]
    fn test_spread_weights() {
        let bull = Strategy::spread([0.3_f64; 2], 0.05, 1.0, [90.0, 110.0], false, Direction::Bullish)
            .unwrap();
        let bear = Strategy::spread([0.3_f64; 2], 0.05, 1.0, [90.0, 110.0], false, Direction::Bearish)
            .unwrap();
        assert_eq!(bull.weights(), [1.0, -1.0]);
        assert_eq!(bear.weights(), [-1.0, 1.0]);
        assert!(bull.legs().iter().all(|leg| !leg.option.contract().is_call()));
    }

    #[test]
    fn test_risk_reversal_weights() {
        let bull = Strategy::risk_reversal([0.3_f64; 2], 0.05, 1.0, [90.0, 110.0], Direction::Bullish)
            .unwrap();
        let bear = Strategy::risk_reversal([0.3_f64; 2], 0.05, 1.0, [90.0, 110.0], Direction::Bearish)
            .unwrap();
        assert_eq!(bull.weights(), [-1.0, 1.0]);
        assert_eq!(bear.weights(), [1.0, -1.0]);
        assert_eq!(bull.kind(), StrategyKind::RiskReversal);
    }

    #[test]
    fn test_butterfly_weights() {
        let fly = Strategy::butterfly([0.3_f64; 3], 0.05, 1.0, [90.0, 100.0, 110.0], false).unwrap();
        assert_eq!(fly.weights(), [1.0, -2.0, 1.0]);
    }

    #[test]
    fn test_invalid_leg_rejected() {
        assert!(matches!(
            Strategy::strangle([0.3_f64, 0.0], 0.05, 1.0, [90.0, 110.0]),
            Err(InstrumentError::InvalidVolatility { .. })
        ));
        assert!(Strategy::butterfly([0.3_f64; 3], 0.05, 1.0, [90.0, -1.0, 110.0], true).is_err());
    }
}
