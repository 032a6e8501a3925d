//! K-nearest-neighbor sets and full distance rankings.
//!
//! Both views are derived from a [`DistanceMatrix`] row by the same
//! pair-sort: attach each column index to its distance, drop the reference
//! point itself, and sort ascending by distance. The sort is stable and the
//! pairs are generated in index order, so equidistant points keep index
//! order — tie handling is a property of the sort, not a separate rule.
//!
//! [`k_nearest`] keeps the first k indices of that ordering; [`rankings`]
//! inverts the whole ordering into a per-point rank table.

use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::PARALLEL_MIN_POINTS;

/// Per-point rank table for one reference point.
///
/// Slot `j` holds point j's 0-based proximity rank to the reference point
/// (`Some(0)` = nearest). The reference point's own slot is `None`: a point
/// is never ranked against itself.
pub type RankVector = Vec<Option<usize>>;

/// The k nearest neighbor indices of every point.
///
/// Returns one `Vec<usize>` of length `k` per point, nearest first, the
/// point itself excluded. Callers must guarantee `k < matrix.len()`; the
/// metric entry points check this before building any matrix.
///
/// # Example
///
/// ```rust
/// use tnc::{k_nearest, DistanceMatrix};
///
/// let points = vec![vec![0.0_f32], vec![1.0], vec![10.0]];
/// let m = DistanceMatrix::from_points(&points);
/// let neighbors = k_nearest(&m, 1);
///
/// assert_eq!(neighbors, vec![vec![1], vec![0], vec![1]]);
/// ```
#[must_use]
pub fn k_nearest(matrix: &DistanceMatrix, k: usize) -> Vec<Vec<usize>> {
    let n = matrix.len();

    let row_neighbors = |i: usize| -> Vec<usize> {
        let mut pairs: Vec<(usize, f32)> = matrix
            .row(i)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .collect();
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
        pairs.into_iter().take(k).map(|(j, _)| j).collect()
    };

    if n >= PARALLEL_MIN_POINTS {
        (0..n).into_par_iter().map(row_neighbors).collect()
    } else {
        (0..n).map(row_neighbors).collect()
    }
}

/// Rank every point by its distance to `self_index`.
///
/// `row` is one distance-matrix row (all distances from the reference
/// point). The result has `row.len()` slots; see [`RankVector`] for the
/// slot contract.
///
/// # Example
///
/// ```rust
/// use tnc::rankings;
///
/// // Distances from point 1 to points 0..3
/// let row = [4.0_f32, 0.0, 1.0, 7.0];
/// let ranks = rankings(&row, 1);
///
/// assert_eq!(ranks, vec![Some(1), None, Some(0), Some(2)]);
/// ```
#[must_use]
pub fn rankings(row: &[f32], self_index: usize) -> RankVector {
    let mut pairs: Vec<(usize, f32)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(j, _)| j != self_index)
        .collect();
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks: RankVector = vec![None; row.len()];
    for (rank, (j, _)) in pairs.into_iter().enumerate() {
        ranks[j] = Some(rank);
    }
    ranks
}

/// [`rankings`] for every row of `matrix`.
#[must_use]
pub fn rank_matrix(matrix: &DistanceMatrix) -> Vec<RankVector> {
    let n = matrix.len();

    if n >= PARALLEL_MIN_POINTS {
        (0..n)
            .into_par_iter()
            .map(|i| rankings(matrix.row(i), i))
            .collect()
    } else {
        (0..n).map(|i| rankings(matrix.row(i), i)).collect()
    }
}
