//! Closed-form Black-Scholes-Merton formulas.
//!
//! Free functions over [`OptionContract`](crate::instruments::OptionContract)
//! and a per-call spot, one submodule per payoff family:
//! - [`vanilla`]: European calls and puts
//! - [`digital`]: cash-or-nothing calls and puts paying 1
//!
//! The instrument types in [`crate::instruments`] delegate to these; call
//! them directly when no wrapper is needed.

pub mod digital;
pub mod vanilla;
