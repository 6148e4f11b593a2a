//! Score, residual and combined metric computation.

use proptest::prelude::*;
use riskboard_core::scoring::{
    RiskMetrics, compute_metrics, compute_residual_score, compute_score,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_high_probability_partial_mitigation_stays_highest() {
    let metrics = compute_metrics(6, 8, Some(0.3));

    assert_eq!(metrics.score, 48);
    assert_eq!(metrics.risk_level, "HIGHEST");
    assert_close(metrics.residual_score, 33.6);
    assert_eq!(metrics.residual_risk_level, "HIGHEST");
}

#[test]
fn test_strong_mitigation_drops_to_lowest() {
    let metrics = compute_metrics(1, 3, Some(0.9));

    assert_eq!(metrics.score, 3);
    assert_eq!(metrics.risk_level, "LOW");
    assert_close(metrics.residual_score, 0.3);
    assert_eq!(metrics.residual_risk_level, "LOWEST");
}

#[test]
fn test_missing_effectiveness_means_no_mitigation() {
    let metrics = compute_metrics(4, 7, None);

    assert_eq!(metrics.score, 28);
    assert_eq!(metrics.residual_score, 28.0);
    assert_eq!(metrics.residual_risk_level, metrics.risk_level);
    assert_eq!(metrics, compute_metrics(4, 7, Some(0.0)));
}

#[test]
fn test_residual_crosses_tiers() {
    // 2 * 4 = 8 (MEDIUM HIGH); 8 * 0.5 = 4 (MEDIUM LOW).
    let metrics = compute_metrics(2, 4, Some(0.5));
    assert_eq!(metrics.risk_level, "MEDIUM HIGH");
    assert_eq!(metrics.residual_score, 4.0);
    assert_eq!(metrics.residual_risk_level, "MEDIUM LOW");
}

#[test]
fn test_out_of_domain_inputs_still_compute() {
    let zero = compute_metrics(0, 5, None);
    assert_eq!(zero.score, 0);
    assert_eq!(zero.risk_level, "LOWEST");

    let over = compute_metrics(12, 10, Some(1.5));
    assert_eq!(over.score, 120);
    assert_eq!(over.risk_level, "HIGHEST");
    assert_close(over.residual_score, -60.0);
    assert_eq!(over.residual_risk_level, "LOWEST");
}

#[test]
fn test_compute_metrics_is_bit_identical_across_calls() {
    let first: RiskMetrics = compute_metrics(7, 5, Some(0.1));
    let second: RiskMetrics = compute_metrics(7, 5, Some(0.1));

    assert_eq!(first.score, second.score);
    assert_eq!(first.risk_level, second.risk_level);
    assert_eq!(
        first.residual_score.to_bits(),
        second.residual_score.to_bits()
    );
    assert_eq!(first.residual_risk_level, second.residual_risk_level);
}

#[test]
fn test_metrics_serialize_camel_case() {
    let json = serde_json::to_value(compute_metrics(6, 8, Some(0.5))).unwrap();
    assert_eq!(json["score"], 48);
    assert_eq!(json["riskLevel"], "HIGHEST");
    assert_eq!(json["residualScore"], 24.0);
    assert_eq!(json["residualRiskLevel"], "HIGHEST");
}

proptest! {
    #[test]
    fn prop_score_is_product_within_domain(p in 1i32..=9, i in 1i32..=9) {
        let score = compute_score(p, i);
        prop_assert_eq!(score, i64::from(p * i));
        prop_assert!((1..=81).contains(&score));
    }

    #[test]
    fn prop_residual_bounded_by_score(s in 0i64..=81, e in 0.0f64..=1.0) {
        let score = s as f64;
        let residual = compute_residual_score(score, e);
        prop_assert!(residual >= 0.0);
        prop_assert!(residual <= score);
    }

    #[test]
    fn prop_residual_endpoints(s in 0i64..=81) {
        let score = s as f64;
        prop_assert_eq!(compute_residual_score(score, 0.0), score);
        prop_assert_eq!(compute_residual_score(score, 1.0), 0.0);
    }
}
