//! Option instrument definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) over the two payoff families:
//! - [`OptionContract`] holds the shared immutable terms
//! - [`VanillaOption`] and [`DigitalOption`] wrap a contract and implement
//!   [`Valuation`](crate::traits::Valuation)
//! - [`OptionInstrument`] is the closed union of both
//!
//! # Examples
//!
//! ```
//! use bsm_models::instruments::{DigitalOption, OptionInstrument, VanillaOption};
//! use bsm_models::traits::Valuation;
//!
//! let book = [
//!     OptionInstrument::from(VanillaOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap()),
//!     OptionInstrument::from(DigitalOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap()),
//! ];
//!
//! let total: f64 = book.iter().map(|instrument| instrument.price(100.0)).sum();
//! assert!(total > 20.0);
//! ```

mod contract;
mod digital;
mod error;
mod instrument;
mod vanilla;

pub use contract::{validate_spot, OptionContract};
pub use digital::DigitalOption;
pub use error::InstrumentError;
pub use instrument::OptionInstrument;
pub use vanilla::VanillaOption;
