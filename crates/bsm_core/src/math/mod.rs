//! Mathematical primitives.
//!
//! - `distributions`: Standard normal PDF, CDF and inverse CDF
//! - `aggregate`: Sums and weighted sums over sequences

pub mod aggregate;
pub mod distributions;

pub use aggregate::{sum, sum_product, weighted_sum};
pub use distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};
