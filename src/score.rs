//! Shared rank-violation scoring core.
//!
//! Trustworthiness and continuity are the same algorithm run in opposite
//! directions: take each point's k-neighborhood in one space, look those
//! neighbors up in the other space's full distance ranking, and penalize
//! every neighbor whose rank there is k or worse. Which space supplies the
//! neighborhoods and which supplies the rankings is the only difference
//! between the two metrics, so both call [`rank_violation_score`] with the
//! matrices swapped.
//!
//! # Mathematical Formulation
//!
//! For sample count n and neighborhood size k:
//!
//! ```text
//! error(i)  = Σ (rank(i, j) - k)   over j in N_k(i) with rank(i, j) >= k
//! score     = 1 - 2 / (n·k·(2n - 3k - 1)) · Σᵢ error(i)
//! local(i)  = 1 - 2·error(i) / (k·(2n - 3k - 1))
//! ```
//!
//! A projection that preserves every k-neighborhood exactly accumulates zero
//! error and scores exactly 1.0, globally and per point.
//!
//! # References
//!
//! - Venna & Kaski (2001). "Neighborhood Preservation in Nonlinear Projection
//!   Methods: An Experimental Study"
//! - Venna & Kaski (2006). "Local multidimensional scaling"

use crate::distance::DistanceMatrix;
use crate::error::{MetricError, Result};
use crate::neighbors::{k_nearest, rank_matrix};

/// Outcome of a single metric computation.
///
/// `score` aggregates the whole dataset; `local_scores` break the same
/// penalty down per point, for spotting where an embedding fails locally.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricResult {
    /// Aggregate score. 1.0 means every k-neighborhood was preserved; for
    /// benign inputs the value stays within [0, 1], but the formula does not
    /// hard-bound it.
    pub score: f64,
    /// Per-point scores, index-aligned with the input datasets.
    pub local_scores: Vec<f64>,
    /// Neighborhood size this result was computed with.
    pub k: usize,
    /// Sample count this result was computed with.
    pub n: usize,
}

/// Check the dataset pair and neighborhood size before any computation.
///
/// Enforced here, once, for every public metric entry point:
/// - both datasets describe the same number of samples,
/// - each dataset is rectangular (every point matches point 0's
///   dimensionality; the two datasets' dimensionalities are unrelated),
/// - `k < n`.
pub(crate) fn validate_inputs(high: &[Vec<f32>], low: &[Vec<f32>], k: usize) -> Result<()> {
    if high.len() != low.len() {
        return Err(MetricError::SampleCountMismatch {
            high: high.len(),
            low: low.len(),
        });
    }

    for dataset in [high, low] {
        if let Some(first) = dataset.first() {
            for (index, point) in dataset.iter().enumerate() {
                if point.len() != first.len() {
                    return Err(MetricError::DimensionMismatch {
                        index,
                        got: point.len(),
                        expected: first.len(),
                    });
                }
            }
        }
    }

    let n = high.len();
    if k >= n {
        return Err(MetricError::InvalidParameter { k, n });
    }

    Ok(())
}

/// Score rank violations of `neighbor_space`'s k-neighborhoods against
/// `rank_space`'s distance rankings.
///
/// Trustworthiness passes (low, high), continuity passes (high, low).
///
/// Violation counts are exact integers; only the final normalization runs in
/// floating point. With k approaching n the normalization term `2n - 3k - 1`
/// reaches zero and the scores degenerate to non-finite values — callers get
/// exactly what the formula produces, only `k >= n` is rejected upstream.
pub(crate) fn rank_violation_score(
    neighbor_space: &DistanceMatrix,
    rank_space: &DistanceMatrix,
    k: usize,
) -> MetricResult {
    let n = neighbor_space.len();
    let neighbors = k_nearest(neighbor_space, k);
    let ranks = rank_matrix(rank_space);

    let mut total_error: u64 = 0;
    let mut local_errors: Vec<u64> = Vec::with_capacity(n);

    for (point_neighbors, point_ranks) in neighbors.iter().zip(&ranks) {
        let mut point_error: u64 = 0;
        for &j in point_neighbors {
            if let Some(rank) = point_ranks[j] {
                if rank >= k {
                    point_error += (rank - k) as u64;
                }
            }
        }
        local_errors.push(point_error);
        total_error += point_error;
    }

    let n_f = n as f64;
    let k_f = k as f64;
    let local_norm = k_f * (2.0 * n_f - 3.0 * k_f - 1.0);
    let score = 1.0 - (2.0 / (n_f * local_norm)) * total_error as f64;
    let local_scores = local_errors
        .iter()
        .map(|&err| 1.0 - (2.0 * err as f64) / local_norm)
        .collect();

    MetricResult {
        score,
        local_scores,
        k,
        n,
    }
}
