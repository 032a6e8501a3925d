//! Neighborhood-preservation quality metrics for dimensionality reduction.
//!
//! `tnc` (from "trustworthiness and continuity") scores how faithfully a
//! low-dimensional projection preserves the local neighbor structure of the
//! original high-dimensional data:
//!
//! - **[`trustworthiness`]**: penalizes *false closeness* — points the
//!   projection placed together that were never neighbors.
//! - **[`continuity`]**: penalizes *false distance* — true neighbors the
//!   projection pushed apart.
//!
//! Both run the same rank-violation machinery in opposite directions, so a
//! low trustworthiness score means "don't believe the clusters you see" and
//! a low continuity score means "structure you should see is missing".
//!
//! # Pipeline
//!
//! | Stage | Entry points | Cost |
//! |-------|--------------|------|
//! | Pairwise distances | [`euclidean`], [`DistanceMatrix`] | O(n²·d) |
//! | Neighbors & ranks | [`k_nearest`], [`rankings`], [`rank_matrix`] | O(n²·log n) |
//! | Scoring | [`trustworthiness`], [`continuity`], [`tnc`] | O(n·k) |
//! | Batch dispatch | [`measure`], [`MetricRequest`] | — |
//!
//! Everything is a pure function over its inputs: no caching, no shared
//! state, safe to call concurrently from any number of threads. Internally
//! the per-row loops run on rayon once a dataset reaches
//! [`PARALLEL_MIN_POINTS`]; this never changes any computed value.
//!
//! # Example
//!
//! ```rust
//! use tnc::tnc;
//!
//! // A 2D dataset and a (perfect) 2D "projection" of it.
//! let data = vec![
//!     vec![0.0_f32, 0.0],
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//! ];
//!
//! let both = tnc(&data, &data, 2)?;
//! assert_eq!(both.trustworthiness.score, 1.0);
//! assert_eq!(both.continuity.score, 1.0);
//! # Ok::<(), tnc::MetricError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` on request and result types |
//!
//! # References
//!
//! - Venna & Kaski (2001). "Neighborhood Preservation in Nonlinear Projection
//!   Methods: An Experimental Study"
//! - Venna & Kaski (2006). "Local multidimensional scaling"
//! - Lee & Verleysen (2009). "Quality assessment of dimensionality reduction:
//!   Rank-based criteria"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod continuity;
mod distance;
mod error;
mod measure;
mod neighbors;
mod score;
mod trustworthiness;

pub use continuity::continuity;
pub use distance::{euclidean, DistanceMatrix};
pub use error::{MetricError, Result};
pub use measure::{
    measure, tnc, MetricId, MetricOutput, MetricParams, MetricRequest, TrustContResult,
};
pub use neighbors::{k_nearest, rank_matrix, rankings, RankVector};
pub use score::MetricResult;
pub use trustworthiness::trustworthiness;

/// Neighborhood size used by the request layer when a request does not
/// specify one (or specifies zero).
pub const DEFAULT_K: usize = 20;

/// Minimum point count before the per-row loops move to the rayon pool.
///
/// Below this, fork-join overhead outweighs the per-row work (a row costs
/// O(n·d) to fill and O(n log n) to rank). Serial and parallel paths produce
/// bitwise-identical output, so the threshold is purely a throughput knob.
pub const PARALLEL_MIN_POINTS: usize = 128;
