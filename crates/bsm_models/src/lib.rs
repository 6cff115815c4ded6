//! # bsm_models (L2: Business Logic)
//!
//! European option contracts, closed-form valuation and multi-leg strategies.
//!
//! This crate provides:
//! - Option contract terms with opt-in validation (`instruments`)
//! - Black-Scholes-Merton formulas for vanilla and digital payoffs (`analytical`)
//! - Fixed-arity weighted strategies: straddle, strangle, spread, risk reversal, butterfly (`strategies`)
//! - Greeks snapshots and parallel spot-ladder profiles (`greeks`, `profile`)
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch over {Vanilla, Digital}
//! - **One reduction for all measures**: a strategy's price and every Greek
//!   are the weighted sum of its legs' values, because differentiation is linear
//! - **Immutable values**: every operation is a pure function of `(entity, spot)`,
//!   so instances can be shared freely across threads
//!
//! ## Preconditions
//!
//! Volatility, time to expiry, strike and spot must be strictly positive.
//! The validated constructors enforce the first three; `new_unchecked`
//! constructors and per-call spots are not checked, and non-positive values
//! propagate as NaN or infinity through every formula.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_models::instruments::VanillaOption;
//! use bsm_models::strategies::Strategy;
//! use bsm_models::traits::Valuation;
//!
//! let call = VanillaOption::new(0.8_f64, 0.1, 0.5, 110.0, true).unwrap();
//! assert!((call.price(100.0) - 20.539885).abs() < 1e-4);
//!
//! let straddle = Strategy::straddle(0.8_f64, 0.1, 0.5, 100.0).unwrap();
//! let put = VanillaOption::new(0.8_f64, 0.1, 0.5, 100.0, false).unwrap();
//! let call = VanillaOption::new(0.8_f64, 0.1, 0.5, 100.0, true).unwrap();
//! assert_eq!(straddle.price(100.0), put.price(100.0) + call.price(100.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod instruments;
pub mod profile;
pub mod strategies;
pub mod traits;
