//! # bsm_core: Numeric Foundation for Closed-Form Option Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! bsm_core is the bottom layer of the workspace, providing:
//! - Standard normal density, cumulative and inverse cumulative functions (`math::distributions`)
//! - Sequence aggregation helpers used by strategy reductions (`math::aggregate`)
//! - The generic `Float` trait re-export (`traits`)
//! - Error types: `PricingError`, `DistributionError`, `AggregationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bsm_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use bsm_core::math::distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};
//!
//! let density = norm_pdf(0.0_f64);
//! assert!((density - 0.3989422804).abs() < 1e-9);
//!
//! let z = inverse_norm_cdf(0.975_f64).unwrap();
//! assert!((z - 1.959963985).abs() < 1e-8);
//! assert!((norm_cdf(z) - 0.975).abs() < 1e-7);
//!
//! // Probabilities outside (0, 1) are rejected
//! assert!(inverse_norm_cdf(1.0_f64).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
