//! Integration tests exercising the public metric surface end to end.
//!
//! Fixtures are deliberately tiny: neighbor structure must be checkable by
//! hand, and every score here is either exact or pinned within 1e-4.

use tnc::{
    continuity, measure, tnc, trustworthiness, MetricError, MetricRequest, DEFAULT_K,
};

/// Unit square corners: a dataset that is its own perfect projection.
fn perfect_data() -> Vec<Vec<f32>> {
    vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ]
}

/// Two tight clusters in 3D with a 2D projection that keeps them apart.
fn clustered_high() -> Vec<Vec<f32>> {
    vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
        vec![1.5, 2.5, 3.5],
        vec![10.0, 11.0, 12.0],
        vec![11.0, 12.0, 13.0],
    ]
}

fn clustered_low() -> Vec<Vec<f32>> {
    vec![
        vec![0.5, 1.0],
        vec![1.0, 1.5],
        vec![0.75, 1.25],
        vec![5.0, 6.0],
        vec![5.5, 6.5],
    ]
}

#[test]
fn test_perfect_mapping_scores_one() {
    let data = perfect_data();
    let both = tnc(&data, &data, 2).unwrap();

    assert!((both.trustworthiness.score - 1.0).abs() < 1e-4);
    assert!((both.continuity.score - 1.0).abs() < 1e-4);
}

#[test]
fn test_result_structure() {
    let data = perfect_data();
    let result = trustworthiness(&data, &data, 2).unwrap();

    assert_eq!(result.local_scores.len(), 4);
    assert_eq!(result.k, 2);
    assert_eq!(result.n, 4);
}

#[test]
fn test_benign_fixture_scores_in_range() {
    let both = tnc(&clustered_high(), &clustered_low(), 2).unwrap();

    for result in [&both.trustworthiness, &both.continuity] {
        assert!(
            (0.5..=1.0).contains(&result.score),
            "score out of range: {}",
            result.score
        );
        for (i, &local) in result.local_scores.iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&local),
                "local score {} out of range: {}",
                i,
                local
            );
        }
    }
}

#[test]
fn test_individual_calls_match_combined() {
    let high = clustered_high();
    let low = clustered_low();

    let both = tnc(&high, &low, 2).unwrap();
    let trust = trustworthiness(&high, &low, 2).unwrap();
    let cont = continuity(&high, &low, 2).unwrap();

    assert!((trust.score - both.trustworthiness.score).abs() < 1e-4);
    assert!((cont.score - both.continuity.score).abs() < 1e-4);
}

#[test]
fn test_measure_runs_requests_in_order() {
    let high = clustered_high();
    let low = clustered_low();
    let requests = vec![
        MetricRequest::with_k("trustworthiness", 2),
        MetricRequest::with_k("continuity", 2),
        MetricRequest::with_k("tnc", 2),
    ];

    let outputs = measure(&requests, &high, &low).unwrap();
    assert_eq!(outputs.len(), 3);

    let trust = outputs[0].as_single().unwrap();
    let cont = outputs[1].as_single().unwrap();
    let both = outputs[2].as_combined().unwrap();

    assert_eq!(trust, &both.trustworthiness);
    assert_eq!(cont, &both.continuity);
}

#[test]
fn test_measure_defaults_k_when_absent_or_zero() {
    // DEFAULT_K exceeds these sample counts, so the default must surface as
    // an InvalidParameter mentioning k = 20, proving it was applied.
    let data = perfect_data();

    for request in [
        MetricRequest::new("trustworthiness"),
        MetricRequest::with_k("trustworthiness", 0),
    ] {
        let err = measure(&[request], &data, &data).unwrap_err();
        assert_eq!(
            err,
            MetricError::InvalidParameter {
                k: DEFAULT_K,
                n: 4
            }
        );
    }
}

#[test]
fn test_unknown_metric_fails_batch() {
    let data = perfect_data();
    let requests = vec![
        MetricRequest::with_k("tnc", 2),
        MetricRequest::with_k("shepard", 2),
    ];

    let err = measure(&requests, &data, &data).unwrap_err();
    assert_eq!(err, MetricError::UnsupportedMetric("shepard".to_owned()));
}

#[test]
fn test_oversized_k_is_rejected() {
    let high = clustered_high();
    let low = clustered_low();

    let err = trustworthiness(&high, &low, 100).unwrap_err();
    assert_eq!(err, MetricError::InvalidParameter { k: 100, n: 5 });

    let err = continuity(&high, &low, 100).unwrap_err();
    assert_eq!(err, MetricError::InvalidParameter { k: 100, n: 5 });
}

#[test]
fn test_k_and_n_are_stored() {
    let high = clustered_high();
    let low = clustered_low();

    let k2 = trustworthiness(&high, &low, 2).unwrap();
    let k3 = trustworthiness(&high, &low, 3).unwrap();

    assert_eq!(k2.k, 2);
    assert_eq!(k3.k, 3);
    assert_eq!(k2.n, high.len());
    assert_eq!(k3.n, high.len());
}

#[test]
fn test_mismatched_sample_counts_are_rejected() {
    let high = clustered_high();
    let low = clustered_low()[..4].to_vec();

    let err = tnc(&high, &low, 2).unwrap_err();
    assert_eq!(err, MetricError::SampleCountMismatch { high: 5, low: 4 });
}

#[test]
fn test_ragged_dataset_is_rejected() {
    let high = clustered_high();
    let mut low = clustered_low();
    low[3] = vec![5.0];

    let err = continuity(&high, &low, 2).unwrap_err();
    assert_eq!(
        err,
        MetricError::DimensionMismatch {
            index: 3,
            got: 1,
            expected: 2
        }
    );
}

#[cfg(feature = "serde")]
mod serde_surface {
    use super::*;
    use tnc::MetricOutput;

    #[test]
    fn test_requests_deserialize_from_json() {
        let json = r#"[
            {"id": "trustworthiness", "params": {"k": 2}},
            {"id": "tnc"}
        ]"#;
        let requests: Vec<MetricRequest> = serde_json::from_str(json).unwrap();

        assert_eq!(requests[0], MetricRequest::with_k("trustworthiness", 2));
        assert_eq!(requests[1], MetricRequest::new("tnc"));
    }

    #[test]
    fn test_outputs_serialize_with_named_metrics() {
        let data = perfect_data();
        let outputs = measure(&[MetricRequest::with_k("tnc", 2)], &data, &data).unwrap();

        let json = serde_json::to_value(&outputs[0]).unwrap();
        assert!(json.get("trustworthiness").is_some());
        assert!(json.get("continuity").is_some());
        assert_eq!(json["trustworthiness"]["score"], 1.0);
    }

    #[test]
    fn test_output_round_trip() {
        let data = perfect_data();
        let outputs = measure(&[MetricRequest::with_k("trustworthiness", 2)], &data, &data)
            .unwrap();

        let json = serde_json::to_string(&outputs).unwrap();
        let back: Vec<MetricOutput> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outputs);
    }
}
