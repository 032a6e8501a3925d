//! Batch facade: run named metric requests against one dataset pair.
//!
//! The dispatcher is a thin, stateless layer over the metric functions. A
//! request names a metric by identifier string and optionally overrides the
//! neighborhood size; [`measure`] runs an ordered list of requests and
//! returns one output per request, in request order.
//!
//! Identifier resolution goes through a static lookup table
//! ([`MetricId::REGISTRY`]) rather than string matching scattered through the
//! dispatch path, so adding a metric means adding a table row and an enum
//! variant.
//!
//! # Batch Atomicity
//!
//! `measure` is all-or-nothing: every identifier is resolved before any
//! metric is computed, so an unknown identifier fails the batch with zero
//! work done, and any later failure discards the whole batch. Callers never
//! observe partial result lists.

use crate::continuity::continuity;
use crate::error::{MetricError, Result};
use crate::score::{rank_violation_score, validate_inputs, MetricResult};
use crate::trustworthiness::trustworthiness;
use crate::{DistanceMatrix, DEFAULT_K};

/// Both metrics over one dataset pair, as produced by [`tnc`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrustContResult {
    /// See [`trustworthiness`](crate::trustworthiness).
    pub trustworthiness: MetricResult,
    /// See [`continuity`](crate::continuity).
    pub continuity: MetricResult,
}

/// Trustworthiness and continuity in one call.
///
/// Equivalent to calling [`trustworthiness`](crate::trustworthiness) and
/// [`continuity`](crate::continuity) with the same arguments, but the two
/// distance matrices are built once and shared — the scores are identical
/// either way, only the redundant O(n²·d) matrix builds are skipped.
///
/// # Errors
///
/// Same contract as the individual metrics; nothing is computed on error.
///
/// # Example
///
/// ```rust
/// use tnc::tnc;
///
/// let data = vec![vec![0.0_f32, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
/// let both = tnc(&data, &data, 2)?;
///
/// assert_eq!(both.trustworthiness.score, 1.0);
/// assert_eq!(both.continuity.score, 1.0);
/// # Ok::<(), tnc::MetricError>(())
/// ```
pub fn tnc(high: &[Vec<f32>], low: &[Vec<f32>], k: usize) -> Result<TrustContResult> {
    validate_inputs(high, low, k)?;

    let high_matrix = DistanceMatrix::from_points(high);
    let low_matrix = DistanceMatrix::from_points(low);

    Ok(TrustContResult {
        trustworthiness: rank_violation_score(&low_matrix, &high_matrix, k),
        continuity: rank_violation_score(&high_matrix, &low_matrix, k),
    })
}

/// Resolved metric identifier: the dispatch tag a request's `id` parses to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricId {
    /// `"trustworthiness"`
    Trustworthiness,
    /// `"continuity"`
    Continuity,
    /// `"tnc"` — both metrics in one output.
    Tnc,
}

impl MetricId {
    /// Identifier-to-variant dispatch table. One row per supported metric.
    pub const REGISTRY: &'static [(&'static str, MetricId)] = &[
        ("trustworthiness", MetricId::Trustworthiness),
        ("continuity", MetricId::Continuity),
        ("tnc", MetricId::Tnc),
    ];

    /// The identifier string this variant parses from.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MetricId::Trustworthiness => "trustworthiness",
            MetricId::Continuity => "continuity",
            MetricId::Tnc => "tnc",
        }
    }
}

impl std::str::FromStr for MetricId {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self> {
        MetricId::REGISTRY
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, id)| id)
            .ok_or_else(|| MetricError::UnsupportedMetric(s.to_owned()))
    }
}

/// Per-request parameters. Only the neighborhood size is recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricParams {
    /// Neighborhood size. `None` — and, matching the reference dispatcher's
    /// falsy test, `Some(0)` — fall back to [`DEFAULT_K`].
    pub k: Option<usize>,
}

impl MetricParams {
    /// The neighborhood size this request resolves to.
    #[must_use]
    pub fn effective_k(self) -> usize {
        match self.k {
            Some(0) | None => DEFAULT_K,
            Some(k) => k,
        }
    }
}

/// One entry of a [`measure`] batch: a metric identifier plus parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRequest {
    /// Metric identifier; must match a row of [`MetricId::REGISTRY`].
    pub id: String,
    /// Request parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: MetricParams,
}

impl MetricRequest {
    /// Request `id` with default parameters.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: MetricParams::default(),
        }
    }

    /// Request `id` with an explicit neighborhood size.
    #[must_use]
    pub fn with_k(id: impl Into<String>, k: usize) -> Self {
        Self {
            id: id.into(),
            params: MetricParams { k: Some(k) },
        }
    }
}

/// Output of one batch entry.
///
/// Single-metric requests produce [`MetricOutput::Single`]; a `"tnc"` request
/// produces [`MetricOutput::Combined`] carrying both sub-results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricOutput {
    /// Result of a `"trustworthiness"` or `"continuity"` request.
    Single(MetricResult),
    /// Result of a `"tnc"` request.
    Combined(TrustContResult),
}

impl MetricOutput {
    /// The single-metric result, if this output holds one.
    #[must_use]
    pub fn as_single(&self) -> Option<&MetricResult> {
        match self {
            MetricOutput::Single(result) => Some(result),
            MetricOutput::Combined(_) => None,
        }
    }

    /// The combined result, if this output holds one.
    #[must_use]
    pub fn as_combined(&self) -> Option<&TrustContResult> {
        match self {
            MetricOutput::Single(_) => None,
            MetricOutput::Combined(both) => Some(both),
        }
    }
}

/// Run a batch of metric requests against one dataset pair.
///
/// Produces exactly one [`MetricOutput`] per request, in request order. See
/// the [module docs](self) for the atomicity contract: unknown identifiers
/// fail before any computation, and no partial batch is ever returned.
///
/// # Errors
///
/// [`MetricError::UnsupportedMetric`] for an unrecognized `id`, plus every
/// error the individual metrics can return.
///
/// # Example
///
/// ```rust
/// use tnc::{measure, MetricRequest};
///
/// let data = vec![vec![0.0_f32, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
/// let requests = vec![
///     MetricRequest::with_k("trustworthiness", 2),
///     MetricRequest::with_k("tnc", 2),
/// ];
///
/// let outputs = measure(&requests, &data, &data)?;
/// assert_eq!(outputs.len(), 2);
/// assert_eq!(outputs[0].as_single().unwrap().score, 1.0);
/// assert_eq!(outputs[1].as_combined().unwrap().continuity.score, 1.0);
/// # Ok::<(), tnc::MetricError>(())
/// ```
pub fn measure(
    requests: &[MetricRequest],
    high: &[Vec<f32>],
    low: &[Vec<f32>],
) -> Result<Vec<MetricOutput>> {
    // Resolve every identifier before computing anything.
    let resolved: Vec<(MetricId, usize)> = requests
        .iter()
        .map(|request| Ok((request.id.parse()?, request.params.effective_k())))
        .collect::<Result<_>>()?;

    resolved
        .into_iter()
        .map(|(id, k)| match id {
            MetricId::Trustworthiness => {
                trustworthiness(high, low, k).map(MetricOutput::Single)
            }
            MetricId::Continuity => continuity(high, low, k).map(MetricOutput::Single),
            MetricId::Tnc => tnc(high, low, k).map(MetricOutput::Combined),
        })
        .collect()
}
