//! Risk construction and revision.
//!
//! Construction never validates and never fails: whatever the inputs, the
//! derived fields are computed. Callers that want to block bad data run
//! `validate_raw_input` themselves, before or after building.
//!
//! Time is injected via the `_at` / `now` parameters for deterministic
//! callers. `build_risk_item` is the convenience entry point that reads the
//! wall clock once.

use chrono::{DateTime, Utc};

use super::model::{RawRiskInput, RiskDraft, RiskItem};
use super::status::RiskStatus;
use crate::scoring::{
    Violation, compute_metrics, validate_mitigation_effectiveness, validate_probability_impact,
};

/// Build a scored draft, stamping both timestamps with the current time.
pub fn build_risk_item(raw: RawRiskInput) -> RiskDraft {
    build_risk_item_at(raw, Utc::now())
}

/// Build a scored draft with an explicit creation time.
///
/// `created_at == updated_at == now`. Status defaults to `Open`,
/// effectiveness to 0.
pub fn build_risk_item_at(raw: RawRiskInput, now: DateTime<Utc>) -> RiskDraft {
    let effectiveness = raw.mitigation_effectiveness.unwrap_or(0.0);
    let metrics = compute_metrics(raw.probability, raw.impact, Some(effectiveness));

    RiskDraft {
        description: raw.description,
        probability: raw.probability,
        impact: raw.impact,
        score: metrics.score,
        risk_level: metrics.risk_level.to_string(),
        mitigation_effectiveness: effectiveness,
        residual_score: metrics.residual_score,
        residual_risk_level: metrics.residual_risk_level.to_string(),
        owner: raw.owner,
        category: raw.category,
        status: raw.status.unwrap_or_default(),
        completion_date: raw.completion_date,
        notes: raw.notes,
        comments: raw.comments,
        created_at: now,
        updated_at: now,
    }
}

/// All range violations for a raw input. Effectiveness is only checked when
/// present.
pub fn validate_raw_input(raw: &RawRiskInput) -> Vec<Violation> {
    let mut violations = validate_probability_impact(raw.probability, raw.impact);
    if let Some(effectiveness) = raw.mitigation_effectiveness {
        violations.extend(validate_mitigation_effectiveness(effectiveness));
    }
    violations
}

impl RiskItem {
    /// Replace inputs and metadata from `raw` and recompute every derived
    /// field. Keeps `id` and `created_at`; `updated_at` becomes `now`.
    pub fn revise(&self, raw: RawRiskInput, now: DateTime<Utc>) -> RiskItem {
        let mut revised = build_risk_item_at(raw, now).into_item(self.id.clone());
        revised.created_at = self.created_at;
        revised
    }

    /// Whether the derived fields equal what the engine computes from the
    /// current inputs. `revise(self.to_raw_input(), now)` restores them.
    pub fn has_consistent_metrics(&self) -> bool {
        let metrics = compute_metrics(
            self.probability,
            self.impact,
            Some(self.mitigation_effectiveness),
        );
        self.score == metrics.score
            && self.risk_level == metrics.risk_level
            && self.residual_score.to_bits() == metrics.residual_score.to_bits()
            && self.residual_risk_level == metrics.residual_risk_level
    }

    /// Change only the status; `updated_at` becomes `now`.
    pub fn with_status(&self, status: RiskStatus, now: DateTime<Utc>) -> RiskItem {
        RiskItem {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}
