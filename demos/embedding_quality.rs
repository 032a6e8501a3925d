//! Scoring two projections of the same dataset.
//!
//! The dataset is a noisy circle living in 3D (x, y on the ring, z mostly
//! flat). Two 2D "embeddings" compete:
//!
//! - **keep-xy**: drops the near-constant z axis — neighborhoods survive.
//! - **keep-z**: drops the ring and keeps the noise — neighborhoods shatter.
//!
//! ```bash
//! cargo run --example embedding_quality --release
//! ```

use tnc::{tnc, TrustContResult};

fn ring_3d(n: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            // Small deterministic wobble keeps z from being constant.
            let z = (i as f32 * 2.7).sin() * 0.05;
            vec![angle.cos(), angle.sin(), z]
        })
        .collect()
}

fn report(name: &str, result: &TrustContResult) {
    println!(
        "{name:>8}  trustworthiness = {:.4}  continuity = {:.4}",
        result.trustworthiness.score, result.continuity.score
    );

    let worst = result
        .continuity
        .local_scores
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1));
    if let Some((index, score)) = worst {
        println!("          worst local continuity: point {index} at {score:.4}");
    }
}

fn main() {
    let n = 60;
    let k = 5;
    let high = ring_3d(n);

    let keep_xy: Vec<Vec<f32>> = high.iter().map(|p| vec![p[0], p[1]]).collect();
    let keep_z: Vec<Vec<f32>> = high.iter().map(|p| vec![p[2]]).collect();

    println!("{n} points on a noisy 3D ring, k = {k}\n");

    let good = tnc(&high, &keep_xy, k).expect("valid inputs");
    let bad = tnc(&high, &keep_z, k).expect("valid inputs");

    report("keep-xy", &good);
    report("keep-z", &bad);

    assert!(good.trustworthiness.score > bad.trustworthiness.score);
    assert!(good.continuity.score > bad.continuity.score);
    println!("\nkeep-xy preserves the ring; keep-z does not.");
}
