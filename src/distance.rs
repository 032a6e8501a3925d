//! Pairwise Euclidean distances.
//!
//! The metrics in this crate never look at raw coordinates directly: every
//! downstream stage (neighbor extraction, rank computation, scoring) consumes
//! a [`DistanceMatrix`] built here, once per input space per call.
//!
//! # Complexity
//!
//! Building a matrix for n points of dimension d costs O(n² · d) time and
//! O(n²) space. This is exact, exhaustive computation; there is no index and
//! no approximation.

use rayon::prelude::*;

use crate::PARALLEL_MIN_POINTS;

/// Euclidean (L2) distance between two points: `sqrt(Σ(a[i] - b[i])²)`.
///
/// # Debug Assertions
///
/// In debug builds, panics if the point lengths differ. In release builds,
/// mismatched lengths silently use the shorter length; the crate's metric
/// entry points validate dimensionality up front, so internal callers never
/// hit that case.
///
/// # Example
///
/// ```rust
/// use tnc::euclidean;
///
/// let a = [0.0_f32, 0.0];
/// let b = [3.0_f32, 4.0];
/// assert!((euclidean(&a, &b) - 5.0).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "euclidean: dimension mismatch ({} vs {})",
        a.len(),
        b.len()
    );

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Symmetric pairwise distance matrix for one dataset.
///
/// Stored as a flat row-major `Vec<f32>`:
///
/// ```text
/// data[i * n + j] = distance between point i and point j
/// ```
///
/// Invariants, by construction:
/// - symmetric: `get(i, j) == get(j, i)`
/// - zero diagonal: `get(i, i) == 0.0`
///
/// The matrix is never mutated after construction.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    /// Distances in row-major order: `data[i * n + j]`.
    data: Vec<f32>,
    /// Number of points.
    n: usize,
}

impl DistanceMatrix {
    /// Build the full n×n matrix for `points`.
    ///
    /// Small inputs compute the upper triangle and mirror it. At
    /// [`PARALLEL_MIN_POINTS`] and above, rows are computed whole on the
    /// rayon pool instead; `euclidean(a, b)` and `euclidean(b, a)` sum the
    /// same squared differences in the same order, so both paths produce
    /// bitwise-identical matrices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tnc::DistanceMatrix;
    ///
    /// let points = vec![vec![0.0_f32, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
    /// let m = DistanceMatrix::from_points(&points);
    ///
    /// assert_eq!(m.len(), 3);
    /// assert_eq!(m.get(0, 0), 0.0);
    /// assert_eq!(m.get(0, 1), m.get(1, 0));
    /// assert!((m.get(1, 2) - 2.0_f32.sqrt()).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn from_points(points: &[Vec<f32>]) -> Self {
        let n = points.len();
        let mut data = vec![0.0_f32; n * n];

        if n >= PARALLEL_MIN_POINTS {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, slot) in row.iter_mut().enumerate() {
                    if i != j {
                        *slot = euclidean(&points[i], &points[j]);
                    }
                }
            });
        } else {
            for i in 0..n {
                for j in (i + 1)..n {
                    let dist = euclidean(&points[i], &points[j]);
                    data[i * n + j] = dist;
                    data[j * n + i] = dist;
                }
            }
        }

        Self { data, n }
    }

    /// Number of points (the matrix is `len() × len()`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// `true` for the matrix of an empty dataset.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    /// All distances from point `i`, as a slice of length `len()`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
