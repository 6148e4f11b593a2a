//! Severity and residual score arithmetic.
//!
//! - `score = probability * impact` (integer, no rounding)
//! - `residual_score = score * (1 - mitigation_effectiveness)` (real, not
//!   rounded or clamped)
//!
//! Nothing here validates its inputs. Out-of-domain ratings still produce a
//! deterministic result; rejecting them is the caller's decision.

use serde::Serialize;

use super::level::classify_tier;

/// Derived scoring fields for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// `probability * impact`.
    pub score: i64,
    /// Tier name for `score`.
    pub risk_level: &'static str,
    /// `score * (1 - effectiveness)`.
    pub residual_score: f64,
    /// Tier name for `residual_score`.
    pub residual_risk_level: &'static str,
}

/// Severity score. Widened to `i64` so no pair of `i32` ratings can overflow.
pub fn compute_score(probability: i32, impact: i32) -> i64 {
    i64::from(probability) * i64::from(impact)
}

/// Score remaining after the mitigation discount.
pub fn compute_residual_score(score: f64, effectiveness: f64) -> f64 {
    score * (1.0 - effectiveness)
}

/// Compute every derived field. `None` effectiveness means no mitigation.
pub fn compute_metrics(probability: i32, impact: i32, effectiveness: Option<f64>) -> RiskMetrics {
    let score = compute_score(probability, impact);
    let residual_score = compute_residual_score(score as f64, effectiveness.unwrap_or(0.0));

    RiskMetrics {
        score,
        risk_level: classify_tier(score as f64).name,
        residual_score,
        residual_risk_level: classify_tier(residual_score).name,
    }
}

/// Render a score with a fixed number of decimals (e.g. residuals in tables).
pub fn format_score(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_score_uses_fixed_precision() {
        assert_eq!(format_score(33.599999999999994, 1), "33.6");
        assert_eq!(format_score(48.0, 2), "48.00");
        assert_eq!(format_score(0.29999999999999993, 0), "0");
    }

    #[test]
    fn compute_score_does_not_overflow_on_extreme_ratings() {
        assert_eq!(
            compute_score(i32::MAX, i32::MAX),
            i64::from(i32::MAX) * i64::from(i32::MAX)
        );
        assert_eq!(compute_score(i32::MIN, 2), i64::from(i32::MIN) * 2);
    }
}
