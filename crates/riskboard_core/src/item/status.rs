//! Risk workflow status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a risk is in its treatment workflow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Mitigated,
    Closed,
}

/// Every status, in workflow order.
pub const ALL_STATUSES: [RiskStatus; 4] = [
    RiskStatus::Open,
    RiskStatus::InProgress,
    RiskStatus::Mitigated,
    RiskStatus::Closed,
];

impl RiskStatus {
    /// Display label ("Open", "In Progress", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::InProgress => "In Progress",
            RiskStatus::Mitigated => "Mitigated",
            RiskStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text did not name a known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for RiskStatus {
    type Err = ParseStatusError;

    /// Case-insensitive; spaces, underscores and hyphens are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "open" => Ok(RiskStatus::Open),
            "inprogress" => Ok(RiskStatus::InProgress),
            "mitigated" => Ok(RiskStatus::Mitigated),
            "closed" => Ok(RiskStatus::Closed),
            _ => Err(ParseStatusError(s.trim().to_string())),
        }
    }
}
