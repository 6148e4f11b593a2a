//! Severity tier table and threshold lookup.
//!
//! **Rule:** a score belongs to the tier with the greatest threshold that is
//! <= the score. A score below every threshold falls back to the tier whose
//! threshold is 1, so the lookup is total over every `f64` (0, negatives and
//! NaN included).
//!
//! Residual scores are real-valued and are compared raw against the integer
//! thresholds: 5.99 is still MEDIUM LOW.

use serde::Serialize;

// ─── Tier definition ────────────────────────────────────────────────────

/// One severity tier.
///
/// Colours are presentation classes carried through unchanged; the scoring
/// logic never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevel {
    /// Inclusive minimum score for this tier.
    pub threshold: u32,
    /// Display name, also the value stored on risk items.
    pub name: &'static str,
    /// Background colour class.
    pub color: &'static str,
    /// Foreground colour class, if the tier overrides the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<&'static str>,
}

/// Tier table, strictly ascending by threshold.
pub static RISK_LEVELS: [RiskLevel; 6] = [
    RiskLevel {
        threshold: 1,
        name: "LOWEST",
        color: "bg-green-200",
        text_color: Some("text-green-800"),
    },
    RiskLevel {
        threshold: 2,
        name: "VERY LOW",
        color: "bg-green-300",
        text_color: Some("text-green-800"),
    },
    RiskLevel {
        threshold: 3,
        name: "LOW",
        color: "bg-yellow-300",
        text_color: Some("text-yellow-800"),
    },
    RiskLevel {
        threshold: 4,
        name: "MEDIUM LOW",
        color: "bg-orange-300",
        text_color: Some("text-orange-800"),
    },
    RiskLevel {
        threshold: 6,
        name: "MEDIUM HIGH",
        color: "bg-orange-500",
        text_color: Some("text-orange-100"),
    },
    RiskLevel {
        threshold: 9,
        name: "HIGHEST",
        color: "bg-red-600",
        text_color: Some("text-red-100"),
    },
];

// ─── Lookup ─────────────────────────────────────────────────────────────

/// The fallback tier: the one whose threshold is 1.
pub fn lowest_level() -> &'static RiskLevel {
    RISK_LEVELS
        .iter()
        .find(|level| level.threshold == 1)
        .unwrap_or(&RISK_LEVELS[0])
}

/// Classify a score into its severity tier.
///
/// Accepts both integer severity scores (widened to `f64`) and real-valued
/// residual scores.
pub fn classify_tier(score: f64) -> &'static RiskLevel {
    match RISK_LEVELS
        .iter()
        .rev()
        .find(|level| score >= f64::from(level.threshold))
    {
        Some(level) => level,
        None => {
            tracing::debug!(score, "score below lowest tier threshold, using fallback tier");
            lowest_level()
        }
    }
}

/// Look up a tier by its display name (exact match).
pub fn risk_level_by_name(name: &str) -> Option<&'static RiskLevel> {
    RISK_LEVELS.iter().find(|level| level.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_level_is_threshold_one() {
        assert_eq!(lowest_level().threshold, 1);
        assert_eq!(lowest_level().name, "LOWEST");
    }

    #[test]
    fn nan_falls_back_to_lowest() {
        assert_eq!(classify_tier(f64::NAN).name, "LOWEST");
    }
}
