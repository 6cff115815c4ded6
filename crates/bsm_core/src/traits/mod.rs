//! Core numeric traits.
//!
//! All valuation code in the workspace is generic over [`Float`], so the same
//! formulas run on `f64` and `f32`.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use bsm_core::traits::Float;
///
/// fn discount_factor<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = discount_factor(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
