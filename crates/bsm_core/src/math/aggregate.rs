//! Sequence aggregation helpers.
//!
//! Strategy valuation is a weighted sum of leg values; these helpers hold the
//! reduction and the length check shared by every caller.

use num_traits::Float;

use crate::types::AggregationError;

/// Sums all the elements of a slice.
///
/// Returns zero for an empty slice.
///
/// # Examples
/// ```
/// use bsm_core::math::aggregate::sum;
///
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// assert_eq!(sum(&[-1.0_f64, 0.0, 5.0, 10.0]), 14.0);
/// ```
#[inline]
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Folds `(value, weight)` pairs into `Σ weight · value`.
///
/// Accumulates left to right from zero, so a two-leg `[1, 1]` combination
/// returns exactly `a + b`.
///
/// # Examples
/// ```
/// use bsm_core::math::aggregate::weighted_sum;
///
/// let total = weighted_sum([(2.0_f64, 1.0), (3.0, -1.0)]);
/// assert_eq!(total, -1.0);
/// ```
#[inline]
pub fn weighted_sum<T, I>(pairs: I) -> T
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
{
    pairs
        .into_iter()
        .fold(T::zero(), |acc, (value, weight)| acc + value * weight)
}

/// Multiplies elements with the same index and sums the results.
///
/// # Errors
/// `AggregationError::LengthMismatch` if the slices differ in length. The
/// shorter slice is never silently truncated.
///
/// # Examples
/// ```
/// use bsm_core::math::aggregate::sum_product;
///
/// let total = sum_product(&[-1.0_f64, 0.0, 5.0, 10.0], &[-2.0, 3.0, 4.0, 8.0]).unwrap();
/// assert_eq!(total, 102.0);
///
/// assert!(sum_product(&[1.0_f64], &[2.0, 3.0]).is_err());
/// ```
pub fn sum_product<T: Float>(left: &[T], right: &[T]) -> Result<T, AggregationError> {
    if left.len() != right.len() {
        return Err(AggregationError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    Ok(weighted_sum(left.iter().copied().zip(right.iter().copied())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(sum(&[-1.0_f64, 0.0, 5.0, 10.0]), 14.0);
    }

    #[test]
    fn test_sum_product_values() {
        let result = sum_product(&[-1.0_f64, 0.0, 5.0, 10.0], &[-2.0, 3.0, 4.0, 8.0]);
        assert_eq!(result, Ok(102.0));
    }

    #[test]
    fn test_sum_product_empty() {
        assert_eq!(sum_product::<f64>(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_sum_product_length_mismatch() {
        let result = sum_product(&[1.0_f64], &[2.0, 3.0]);
        assert_eq!(
            result,
            Err(AggregationError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_weighted_sum_is_exact_for_unit_weights() {
        let a = 14.225_596_123_f64;
        let b = 20.539_885_456_f64;
        assert_eq!(weighted_sum([(a, 1.0), (b, 1.0)]), a + b);
        assert_eq!(weighted_sum([(a, 1.0), (b, -1.0)]), a - b);
    }

    #[test]
    fn test_weighted_sum_matches_sum_product() {
        let values = [0.5_f64, -1.25, 3.0];
        let weights = [1.0_f64, -2.0, 1.0];
        let pairs = values.iter().copied().zip(weights.iter().copied());
        assert_eq!(weighted_sum(pairs), sum_product(&values, &weights).unwrap());
    }
}
