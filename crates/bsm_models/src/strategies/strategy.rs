//! Generic weighted-leg strategy.

use bsm_core::math::aggregate::weighted_sum;
use bsm_core::types::AggregationError;
use num_traits::Float;

use super::kinds::StrategyKind;
use crate::greeks::Greeks;
use crate::instruments::VanillaOption;
use crate::traits::{Measure, Valuation};

/// One vanilla option held with a signed weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyLeg<T: Float> {
    /// The option held.
    pub option: VanillaOption<T>,
    /// Signed quantity (negative for short positions).
    pub weight: T,
}

impl<T: Float> StrategyLeg<T> {
    /// Creates a leg with an explicit weight.
    #[inline]
    pub fn new(option: VanillaOption<T>, weight: T) -> Self {
        Self { option, weight }
    }

    /// Creates a leg with weight `+1`.
    #[inline]
    pub fn long(option: VanillaOption<T>) -> Self {
        Self::new(option, T::one())
    }

    /// Creates a leg with weight `-1`.
    #[inline]
    pub fn short(option: VanillaOption<T>) -> Self {
        Self::new(option, -T::one())
    }
}

/// Fixed-arity linear combination of vanilla options.
///
/// Each option is stored together with its weight, so the legs and weights
/// can never differ in length.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
/// * `N` - Number of legs
///
/// # Examples
/// ```
/// use bsm_models::instruments::VanillaOption;
/// use bsm_models::strategies::{Strategy, StrategyKind, StrategyLeg};
/// use bsm_models::traits::Valuation;
///
/// let call = VanillaOption::new(0.3_f64, 0.05, 1.0, 100.0, true).unwrap();
/// let put = VanillaOption::new(0.3_f64, 0.05, 1.0, 100.0, false).unwrap();
///
/// // Synthetic forward: long call, short put
/// let forward = Strategy::from_legs([StrategyLeg::long(call), StrategyLeg::short(put)]);
/// assert_eq!(forward.kind(), StrategyKind::Custom);
/// assert!((forward.delta(100.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Strategy<T: Float, const N: usize> {
    kind: StrategyKind,
    #[cfg_attr(feature = "serde", serde(with = "serde_legs"))]
    legs: [StrategyLeg<T>; N],
}

/// Legs as a sequence; serde's built-in array impls do not cover a generic `N`.
#[cfg(feature = "serde")]
mod serde_legs {
    use num_traits::Float;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::StrategyLeg;

    pub fn serialize<S, T, const N: usize>(
        legs: &[StrategyLeg<T>; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Float + Serialize,
    {
        legs.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D, T, const N: usize>(
        deserializer: D,
    ) -> Result<[StrategyLeg<T>; N], D::Error>
    where
        D: Deserializer<'de>,
        T: Float + Deserialize<'de>,
    {
        let legs = Vec::<StrategyLeg<T>>::deserialize(deserializer)?;
        let len = legs.len();
        let expected = format!("{} legs", N);
        legs.try_into()
            .map_err(|_| D::Error::invalid_length(len, &expected.as_str()))
    }
}

impl<T: Float, const N: usize> Strategy<T, N> {
    pub(super) fn with_kind(kind: StrategyKind, legs: [StrategyLeg<T>; N]) -> Self {
        Self { kind, legs }
    }

    /// Builds a custom strategy from explicit legs.
    pub fn from_legs(legs: [StrategyLeg<T>; N]) -> Self {
        Self::with_kind(StrategyKind::Custom, legs)
    }

    /// Builds a custom strategy from separate option and weight sequences.
    ///
    /// # Errors
    /// `AggregationError::LengthMismatch` if the sequences differ in length
    /// or do not hold exactly `N` items.
    ///
    /// # Examples
    /// ```
    /// use bsm_models::instruments::VanillaOption;
    /// use bsm_models::strategies::Strategy;
    ///
    /// let call = VanillaOption::new(0.3_f64, 0.05, 1.0, 100.0, true).unwrap();
    ///
    /// assert!(Strategy::<f64, 2>::try_from_parts(vec![call, call], vec![1.0, -1.0]).is_ok());
    /// assert!(Strategy::<f64, 2>::try_from_parts(vec![call, call], vec![1.0]).is_err());
    /// ```
    pub fn try_from_parts(
        options: Vec<VanillaOption<T>>,
        weights: Vec<T>,
    ) -> Result<Self, AggregationError> {
        if options.len() != weights.len() {
            return Err(AggregationError::LengthMismatch {
                left: options.len(),
                right: weights.len(),
            });
        }

        let legs: Vec<StrategyLeg<T>> = options
            .into_iter()
            .zip(weights)
            .map(|(option, weight)| StrategyLeg::new(option, weight))
            .collect();

        let legs: [StrategyLeg<T>; N] =
            legs.try_into()
                .map_err(|legs: Vec<StrategyLeg<T>>| AggregationError::LengthMismatch {
                    left: legs.len(),
                    right: N,
                })?;

        Ok(Self::from_legs(legs))
    }

    /// Returns the strategy classification.
    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Returns the weighted legs in construction order.
    #[inline]
    pub fn legs(&self) -> &[StrategyLeg<T>; N] {
        &self.legs
    }

    /// Returns the leg weights in construction order.
    pub fn weights(&self) -> [T; N] {
        self.legs.map(|leg| leg.weight)
    }

    /// Evaluates `Σ weightᵢ · legᵢ.measure(spot)`.
    ///
    /// Every [`Valuation`] method of a strategy goes through this reduction.
    #[inline]
    pub fn combine(&self, measure: Measure, spot: T) -> T {
        weighted_sum(
            self.legs
                .iter()
                .map(|leg| (measure.evaluate(&leg.option, spot), leg.weight)),
        )
    }

    /// Returns each leg's unweighted Greeks.
    pub fn leg_greeks(&self, spot: T) -> [Greeks<T>; N] {
        self.legs.map(|leg| leg.option.greeks(spot))
    }
}

impl<T: Float, const N: usize> Valuation<T> for Strategy<T, N> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        self.combine(Measure::Payoff, spot)
    }

    #[inline]
    fn price(&self, spot: T) -> T {
        self.combine(Measure::Price, spot)
    }

    #[inline]
    fn delta(&self, spot: T) -> T {
        self.combine(Measure::Delta, spot)
    }

    #[inline]
    fn gamma(&self, spot: T) -> T {
        self.combine(Measure::Gamma, spot)
    }

    #[inline]
    fn vega(&self, spot: T) -> T {
        self.combine(Measure::Vega, spot)
    }

    #[inline]
    fn theta(&self, spot: T) -> T {
        self.combine(Measure::Theta, spot)
    }

    #[inline]
    fn rho(&self, spot: T) -> T {
        self.combine(Measure::Rho, spot)
    }
}
