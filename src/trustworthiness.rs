//! Trustworthiness: does the projection fabricate false neighbors?
//!
//! A projection is *untrustworthy* where it places points next to each other
//! that were never close in the original space — clusters that look tight in
//! the embedding but are artifacts of the reduction. Trustworthiness takes
//! each point's k-neighborhood in the **projected** space and penalizes every
//! member that sits at rank k or worse in the **original** space's distance
//! ordering, weighted by how far out it really was.

use crate::error::Result;
use crate::score::{rank_violation_score, validate_inputs, MetricResult};
use crate::DistanceMatrix;

/// Trustworthiness of the projection `low` of dataset `high`.
///
/// Both datasets must contain the same number of points, index-aligned
/// (point i of `low` is the projection of point i of `high`); their
/// dimensionalities are independent. Requires `k < n`.
///
/// Builds both distance matrices fresh on every call. Cost O(n²·d + n²·log n).
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
/// use tnc::trustworthiness;
///
/// let data = vec![
///     vec![0.0_f32, 0.0],
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
/// ];
///
/// // A dataset projected onto itself preserves every neighborhood.
/// let result = trustworthiness(&data, &data, 2)?;
/// assert_eq!(result.score, 1.0);
/// assert_eq!(result.local_scores.len(), 4);
/// # Ok::<(), tnc::MetricError>(())
/// ```
pub fn trustworthiness(high: &[Vec<f32>], low: &[Vec<f32>], k: usize) -> Result<MetricResult> {
    validate_inputs(high, low, k)?;

    let high_matrix = DistanceMatrix::from_points(high);
    let low_matrix = DistanceMatrix::from_points(low);

    Ok(rank_violation_score(&low_matrix, &high_matrix, k))
}
