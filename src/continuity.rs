//! Continuity: does the projection tear true neighborhoods apart?
//!
//! The mirror image of trustworthiness. Continuity takes each point's
//! k-neighborhood in the **original** space and penalizes every member that
//! the projection pushed out to rank k or worse in the **projected** space's
//! distance ordering. Low continuity means real structure was torn apart —
//! the classic failure mode of unfolding a manifold too aggressively.

use crate::error::Result;
use crate::score::{rank_violation_score, validate_inputs, MetricResult};
use crate::DistanceMatrix;

/// Continuity of the projection `low` of dataset `high`.
///
/// Same contract as [`trustworthiness`](crate::trustworthiness): equal
/// sample counts, index correspondence, `k < n`, fresh distance matrices per
/// call, cost O(n²·d + n²·log n).
///
/// # Errors
///
/// [`MetricError::InvalidParameter`](crate::MetricError::InvalidParameter)
/// if `k >= n`, and the validation errors described on
/// [`MetricError`](crate::MetricError) for malformed dataset pairs. Nothing
/// is computed when an error is returned.
///
/// # Example
///
/// ```rust
/// use tnc::continuity;
///
/// let data = vec![
///     vec![0.0_f32, 0.0],
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
/// ];
///
/// let result = continuity(&data, &data, 2)?;
/// assert_eq!(result.score, 1.0);
/// # Ok::<(), tnc::MetricError>(())
/// ```
pub fn continuity(high: &[Vec<f32>], low: &[Vec<f32>], k: usize) -> Result<MetricResult> {
    validate_inputs(high, low, k)?;

    let high_matrix = DistanceMatrix::from_points(high);
    let low_matrix = DistanceMatrix::from_points(low);

    Ok(rank_violation_score(&high_matrix, &low_matrix, k))
}
