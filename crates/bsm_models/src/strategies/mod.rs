//! Multi-leg option strategies.
//!
//! A strategy is a fixed-arity list of weighted vanilla legs. Every
//! valuation measure of the strategy is `Σ weightᵢ · legᵢ.measure(spot)`,
//! computed by a single reduction ([`Strategy::combine`]), because the
//! Greeks of a linear combination are the linear combination of the Greeks.
//!
//! | Kind | Legs | Weights |
//! |---|---|---|
//! | Straddle | put(K), call(K) | [1, 1] |
//! | Strangle | put(K₀), call(K₁) | [1, 1] |
//! | Spread | two same-type legs at K₀, K₁ | bullish [1, -1], bearish [-1, 1] |
//! | Risk reversal | put(K₀), call(K₁) | bullish [-1, 1], bearish [1, -1] |
//! | Butterfly | three same-type legs at K₀ < K₁ < K₂ | [1, -2, 1] |

mod kinds;
mod strategy;

pub use kinds::{Direction, StrategyKind};
pub use strategy::{Strategy, StrategyLeg};
