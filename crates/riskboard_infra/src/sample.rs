//! Demo risks used to seed an empty register.

use chrono::{DateTime, Utc};
use riskboard_core::item::{RawRiskInput, RiskDraft, RiskStatus, build_risk_item_at};

use crate::store::{IdGenerator, RegisterMetrics, RiskRegister, StoreError};

struct SampleRisk {
    description: &'static str,
    probability: i32,
    impact: i32,
    effectiveness: f64,
    owner: &'static str,
    category: &'static str,
    status: RiskStatus,
    notes: &'static str,
}

const SAMPLE_RISKS: [SampleRisk; 7] = [
    SampleRisk {
        description: "Data breach due to weak authentication systems",
        probability: 6,
        impact: 8,
        effectiveness: 0.3,
        owner: "IT Security Team",
        category: "Cybersecurity",
        status: RiskStatus::InProgress,
        notes: "Implementing multi-factor authentication",
    },
    SampleRisk {
        description: "Supply chain disruption affecting production",
        probability: 4,
        impact: 7,
        effectiveness: 0.5,
        owner: "Operations Manager",
        category: "Operations",
        status: RiskStatus::Open,
        notes: "Evaluating alternative suppliers",
    },
    SampleRisk {
        description: "Key personnel departure without knowledge transfer",
        probability: 3,
        impact: 6,
        effectiveness: 0.7,
        owner: "HR Department",
        category: "Human Resources",
        status: RiskStatus::Mitigated,
        notes: "Documentation and cross-training completed",
    },
    SampleRisk {
        description: "Regulatory compliance failure in new jurisdiction",
        probability: 5,
        impact: 9,
        effectiveness: 0.2,
        owner: "Legal Team",
        category: "Compliance",
        status: RiskStatus::Open,
        notes: "Engaging local legal counsel",
    },
    SampleRisk {
        description: "Server hardware failure during peak season",
        probability: 2,
        impact: 8,
        effectiveness: 0.8,
        owner: "Infrastructure Team",
        category: "Technology",
        status: RiskStatus::Closed,
        notes: "Redundant systems implemented and tested",
    },
    SampleRisk {
        description: "Market downturn affecting customer demand",
        probability: 7,
        impact: 5,
        effectiveness: 0.1,
        owner: "Sales Director",
        category: "Market",
        status: RiskStatus::Open,
        notes: "Monitoring economic indicators",
    },
    SampleRisk {
        description: "Third-party software license compliance issue",
        probability: 1,
        impact: 3,
        effectiveness: 0.9,
        owner: "IT Department",
        category: "Legal",
        status: RiskStatus::Mitigated,
        notes: "License audit completed and documentation updated",
    },
];

/// Raw inputs of the demo risks, in display order.
pub fn sample_inputs() -> Vec<RawRiskInput> {
    SAMPLE_RISKS
        .iter()
        .map(|sample| RawRiskInput {
            mitigation_effectiveness: Some(sample.effectiveness),
            owner: Some(sample.owner.to_string()),
            category: Some(sample.category.to_string()),
            status: Some(sample.status),
            notes: Some(sample.notes.to_string()),
            ..RawRiskInput::new(sample.description, sample.probability, sample.impact)
        })
        .collect()
}

/// Scored demo drafts sharing one timestamp.
pub fn sample_drafts_at(now: DateTime<Utc>) -> Vec<RiskDraft> {
    sample_inputs()
        .into_iter()
        .map(|raw| build_risk_item_at(raw, now))
        .collect()
}

/// Append the demo risks to `register`.
pub fn seed_register(
    register: &RiskRegister,
    ids: &mut impl IdGenerator,
    metrics: &mut RegisterMetrics,
) -> Result<RiskRegister, StoreError> {
    let (seeded, _) = register.add_all(sample_drafts_at(Utc::now()), ids, metrics)?;
    Ok(seeded)
}
