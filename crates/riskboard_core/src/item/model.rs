//! Risk record types.
//!
//! Derived fields (`score`, `risk_level`, `residual_score`,
//! `residual_risk_level`) are written only by `build_risk_item_at`,
//! `RiskItem::revise` and `RiskItem::with_status`, which keep them consistent
//! with `probability`, `impact` and `mitigation_effectiveness`.
//!
//! The fields are public for serialization and display. Callers must not
//! assign them directly or edit an input without rebuilding; change inputs
//! through `revise`. Items arriving from outside (deserialized) can be
//! checked with `RiskItem::has_consistent_metrics`.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::status::RiskStatus;

// --- Identifier ---------------------------------------------------------

/// Session-unique risk identifier. Assigned by the record store, never by
/// the engine, and immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskId(String);

impl RiskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Raw input ----------------------------------------------------------

/// Unvalidated field values from a form or an import row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRiskInput {
    pub description: String,
    /// Expected domain 1-9.
    pub probability: i32,
    /// Expected domain 1-9.
    pub impact: i32,
    /// Expected domain 0.0-1.0. `None` means no mitigation.
    #[serde(default)]
    pub mitigation_effectiveness: Option<f64>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `None` means `Open`.
    #[serde(default)]
    pub status: Option<RiskStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Comments / lessons learned.
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
}

impl RawRiskInput {
    pub fn new(description: impl Into<String>, probability: i32, impact: i32) -> Self {
        Self {
            description: description.into(),
            probability,
            impact,
            ..Self::default()
        }
    }
}

// --- Draft (no identifier yet) ------------------------------------------

/// A fully scored risk that has not been given an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDraft {
    pub description: String,
    pub probability: i32,
    pub impact: i32,
    pub score: i64,
    pub risk_level: String,
    pub mitigation_effectiveness: f64,
    pub residual_score: f64,
    pub residual_risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: RiskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RiskDraft {
    /// Attach an identifier.
    pub fn into_item(self, id: RiskId) -> RiskItem {
        RiskItem {
            id,
            description: self.description,
            probability: self.probability,
            impact: self.impact,
            score: self.score,
            risk_level: self.risk_level,
            mitigation_effectiveness: self.mitigation_effectiveness,
            residual_score: self.residual_score,
            residual_risk_level: self.residual_risk_level,
            owner: self.owner,
            category: self.category,
            status: self.status,
            completion_date: self.completion_date,
            notes: self.notes,
            comments: self.comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// --- Item ---------------------------------------------------------------

/// A scored risk in the register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub id: RiskId,
    pub description: String,
    pub probability: i32,
    pub impact: i32,
    pub score: i64,
    pub risk_level: String,
    pub mitigation_effectiveness: f64,
    pub residual_score: f64,
    pub residual_risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: RiskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RiskItem {
    /// The editable inputs of this item, e.g. to prefill an edit form.
    pub fn to_raw_input(&self) -> RawRiskInput {
        RawRiskInput {
            description: self.description.clone(),
            probability: self.probability,
            impact: self.impact,
            mitigation_effectiveness: Some(self.mitigation_effectiveness),
            owner: self.owner.clone(),
            category: self.category.clone(),
            status: Some(self.status),
            notes: self.notes.clone(),
            comments: self.comments.clone(),
            completion_date: self.completion_date,
        }
    }
}
