//! Range validation reported as data.

use riskboard_core::item::{RawRiskInput, validate_raw_input};
use riskboard_core::scoring::{
    Violation, validate_mitigation_effectiveness, validate_probability_impact,
};

fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}

#[test]
fn test_valid_ratings_have_no_violations() {
    assert!(validate_probability_impact(6, 8).is_empty());
    assert!(validate_probability_impact(1, 1).is_empty());
    assert!(validate_probability_impact(9, 9).is_empty());
}

#[test]
fn test_zero_probability_reported() {
    let violations = validate_probability_impact(0, 5);
    assert_eq!(
        violations,
        vec![Violation::ProbabilityOutOfRange { probability: 0 }]
    );
    assert_eq!(
        messages(&violations),
        vec!["Probability must be between 1 and 9"]
    );
}

#[test]
fn test_both_ratings_reported_together_in_order() {
    let violations = validate_probability_impact(10, -1);
    assert_eq!(
        messages(&violations),
        vec![
            "Probability must be between 1 and 9",
            "Impact must be between 1 and 9",
        ]
    );
}

#[test]
fn test_impact_only() {
    assert_eq!(
        validate_probability_impact(3, 10),
        vec![Violation::ImpactOutOfRange { impact: 10 }]
    );
}

#[test]
fn test_effectiveness_bounds_inclusive() {
    assert!(validate_mitigation_effectiveness(0.0).is_empty());
    assert!(validate_mitigation_effectiveness(1.0).is_empty());
    assert!(validate_mitigation_effectiveness(0.35).is_empty());
}

#[test]
fn test_effectiveness_out_of_range() {
    for bad in [-0.01, 1.01, 30.0] {
        let violations = validate_mitigation_effectiveness(bad);
        assert_eq!(
            messages(&violations),
            vec!["Mitigation effectiveness must be between 0 and 1 (0% to 100%)"],
            "effectiveness {bad}"
        );
    }
}

#[test]
fn test_nan_effectiveness_is_a_violation() {
    assert_eq!(validate_mitigation_effectiveness(f64::NAN).len(), 1);
}

#[test]
fn test_raw_input_collects_every_violation() {
    let raw = RawRiskInput {
        mitigation_effectiveness: Some(2.0),
        ..RawRiskInput::new("Vendor lock-in", 0, 11)
    };
    assert_eq!(validate_raw_input(&raw).len(), 3);
}

#[test]
fn test_raw_input_without_effectiveness_skips_that_check() {
    let raw = RawRiskInput::new("Vendor lock-in", 4, 4);
    assert!(validate_raw_input(&raw).is_empty());
}
