//! Domain-range validation for raw ratings.
//!
//! Violations are returned as data, one entry per violated constraint, so a
//! form can show every problem at once. These functions never panic and
//! never short-circuit.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Valid domain for probability and impact ratings.
pub const RATING_RANGE: RangeInclusive<i32> = 1..=9;

/// Valid domain for mitigation effectiveness (fraction of risk removed).
pub const EFFECTIVENESS_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// A violated input constraint. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Violation {
    #[error("Probability must be between 1 and 9")]
    ProbabilityOutOfRange { probability: i32 },
    #[error("Impact must be between 1 and 9")]
    ImpactOutOfRange { impact: i32 },
    #[error("Mitigation effectiveness must be between 0 and 1 (0% to 100%)")]
    EffectivenessOutOfRange { effectiveness: f64 },
}

/// Check both ratings. Probability is reported before impact.
pub fn validate_probability_impact(probability: i32, impact: i32) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !RATING_RANGE.contains(&probability) {
        violations.push(Violation::ProbabilityOutOfRange { probability });
    }
    if !RATING_RANGE.contains(&impact) {
        violations.push(Violation::ImpactOutOfRange { impact });
    }

    if !violations.is_empty() {
        tracing::debug!(probability, impact, ?violations, "rating validation failed");
    }
    violations
}

/// Check mitigation effectiveness. NaN is out of range.
pub fn validate_mitigation_effectiveness(effectiveness: f64) -> Vec<Violation> {
    if EFFECTIVENESS_RANGE.contains(&effectiveness) {
        return Vec::new();
    }
    tracing::debug!(effectiveness, "mitigation effectiveness validation failed");
    vec![Violation::EffectivenessOutOfRange { effectiveness }]
}
