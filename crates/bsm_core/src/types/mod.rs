//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing, distribution and aggregation operations
//!
//! # Re-exports
//!
//! [`PricingError`], [`DistributionError`] and [`AggregationError`] are re-exported at this level.

pub mod error;

pub use error::{AggregationError, DistributionError, PricingError};
