//! Risk scoring: severity tiers, score arithmetic, and input validation.

pub mod level;
pub mod metrics;
pub mod validate;

pub use level::{RISK_LEVELS, RiskLevel, classify_tier, lowest_level, risk_level_by_name};
pub use metrics::{
    RiskMetrics, compute_metrics, compute_residual_score, compute_score, format_score,
};
pub use validate::{
    EFFECTIVENESS_RANGE, RATING_RANGE, Violation, validate_mitigation_effectiveness,
    validate_probability_impact,
};
