//! Closed union of option variants.

use num_traits::Float;

use super::contract::OptionContract;
use super::digital::DigitalOption;
use super::vanilla::VanillaOption;
use crate::traits::Valuation;

/// Either option variant, dispatched statically by `match`.
///
/// # Examples
/// ```
/// use bsm_models::instruments::{DigitalOption, OptionInstrument};
/// use bsm_models::traits::Valuation;
///
/// let digital = DigitalOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
/// let instrument = OptionInstrument::from(digital);
/// assert!(instrument.is_digital());
/// assert_eq!(instrument.price(100.0), digital.price(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "style", rename_all = "snake_case"))]
pub enum OptionInstrument<T: Float> {
    /// Vanilla European option.
    Vanilla(VanillaOption<T>),
    /// Cash-or-nothing digital option.
    Digital(DigitalOption<T>),
}

impl<T: Float> OptionInstrument<T> {
    /// Returns whether this is the digital variant.
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, OptionInstrument::Digital(_))
    }

    /// Returns the shared contract terms.
    #[inline]
    pub fn contract(&self) -> &OptionContract<T> {
        match self {
            OptionInstrument::Vanilla(option) => option.contract(),
            OptionInstrument::Digital(option) => option.contract(),
        }
    }

    /// Returns a human-readable variant name for logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionInstrument::Vanilla(_) => "vanilla",
            OptionInstrument::Digital(_) => "digital",
        }
    }
}

impl<T: Float> Valuation<T> for OptionInstrument<T> {
    fn payoff(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.payoff(spot),
            OptionInstrument::Digital(option) => option.payoff(spot),
        }
    }

    fn price(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.price(spot),
            OptionInstrument::Digital(option) => option.price(spot),
        }
    }

    fn delta(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.delta(spot),
            OptionInstrument::Digital(option) => option.delta(spot),
        }
    }

    fn gamma(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.gamma(spot),
            OptionInstrument::Digital(option) => option.gamma(spot),
        }
    }

    fn vega(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.vega(spot),
            OptionInstrument::Digital(option) => option.vega(spot),
        }
    }

    fn theta(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.theta(spot),
            OptionInstrument::Digital(option) => option.theta(spot),
        }
    }

    fn rho(&self, spot: T) -> T {
        match self {
            OptionInstrument::Vanilla(option) => option.rho(spot),
            OptionInstrument::Digital(option) => option.rho(spot),
        }
    }
}

impl<T: Float> From<VanillaOption<T>> for OptionInstrument<T> {
    fn from(option: VanillaOption<T>) -> Self {
        OptionInstrument::Vanilla(option)
    }
}

impl<T: Float> From<DigitalOption<T>> for OptionInstrument<T> {
    fn from(option: DigitalOption<T>) -> Self {
        OptionInstrument::Digital(option)
    }
}
