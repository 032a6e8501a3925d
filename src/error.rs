//! Error surface for metric computation and batch dispatch.
//!
//! Every failure is synchronous and detected before any scoring work starts,
//! so a returned error always means "nothing was computed".

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors reported by metric entry points and the batch dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// Neighborhood size must be strictly smaller than the sample count.
    #[error("invalid parameter: k ({k}) must be less than the number of samples ({n})")]
    InvalidParameter {
        /// Requested neighborhood size.
        k: usize,
        /// Sample count of the datasets.
        n: usize,
    },

    /// A batch request named a metric this crate does not implement.
    #[error("unsupported metric: {0:?}")]
    UnsupportedMetric(String),

    /// The two datasets do not describe the same number of samples.
    #[error("sample count mismatch: {high} high-dimensional vs {low} low-dimensional points")]
    SampleCountMismatch {
        /// Point count of the high-dimensional dataset.
        high: usize,
        /// Point count of the low-dimensional dataset.
        low: usize,
    },

    /// A dataset is ragged: one of its points has a different dimensionality
    /// than the first point.
    #[error("dimension mismatch: point {index} has {got} dimensions, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Dimensionality found at `index`.
        got: usize,
        /// Dimensionality of point 0 of the same dataset.
        expected: usize,
    },
}
