//! Aggregate counts over a risk collection.
//!
//! `by_level` always lists every known tier (zero-filled) because the tier
//! set is closed. `by_status` only lists statuses that were observed.
//! Levels are counted from each item's stored `risk_level`, not recomputed
//! from its score; a stored name outside the tier table gets its own entry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::{RiskItem, RiskStatus};
use crate::scoring::{RISK_LEVELS, RiskLevel};

/// Counts by severity tier and by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub total: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_status: BTreeMap<RiskStatus, usize>,
}

impl RiskSummary {
    /// Known tiers with their counts, ascending by threshold.
    pub fn level_counts(&self) -> Vec<(&'static RiskLevel, usize)> {
        RISK_LEVELS
            .iter()
            .map(|level| (level, self.by_level.get(level.name).copied().unwrap_or(0)))
            .collect()
    }

    /// Count for a single status (0 when unobserved).
    pub fn status_count(&self, status: RiskStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Summarize a collection.
pub fn summarize(risks: &[RiskItem]) -> RiskSummary {
    let mut by_level: BTreeMap<String, usize> = RISK_LEVELS
        .iter()
        .map(|level| (level.name.to_string(), 0))
        .collect();
    let mut by_status = BTreeMap::new();

    for risk in risks {
        *by_level.entry(risk.risk_level.clone()).or_insert(0) += 1;
        *by_status.entry(risk.status).or_insert(0) += 1;
    }

    RiskSummary {
        total: risks.len(),
        by_level,
        by_status,
    }
}
