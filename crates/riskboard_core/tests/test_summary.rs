//! Summary aggregation over risk collections.

use chrono::{TimeZone, Utc};
use riskboard_core::item::{RawRiskInput, RiskId, RiskItem, RiskStatus, build_risk_item_at};
use riskboard_core::scoring::RISK_LEVELS;
use riskboard_core::summary::summarize;

fn item(id: &str, probability: i32, impact: i32, status: RiskStatus) -> RiskItem {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let raw = RawRiskInput {
        status: Some(status),
        ..RawRiskInput::new(format!("risk {id}"), probability, impact)
    };
    build_risk_item_at(raw, now).into_item(RiskId::new(id))
}

#[test]
fn test_empty_collection() {
    let summary = summarize(&[]);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.by_level.len(), RISK_LEVELS.len());
    for level in &RISK_LEVELS {
        assert_eq!(summary.by_level.get(level.name), Some(&0), "{}", level.name);
    }
    assert!(summary.by_status.is_empty());
}

#[test]
fn test_counts_by_level_and_status() {
    let risks = vec![
        item("a", 6, 8, RiskStatus::Open),
        item("b", 5, 9, RiskStatus::Open),
        item("c", 1, 3, RiskStatus::Mitigated),
        item("d", 1, 1, RiskStatus::Closed),
    ];

    let summary = summarize(&risks);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.by_level["HIGHEST"], 2);
    assert_eq!(summary.by_level["LOW"], 1);
    assert_eq!(summary.by_level["LOWEST"], 1);
    assert_eq!(summary.by_level["MEDIUM HIGH"], 0);
    assert_eq!(summary.status_count(RiskStatus::Open), 2);
    assert_eq!(summary.status_count(RiskStatus::Mitigated), 1);
    assert_eq!(summary.status_count(RiskStatus::Closed), 1);
}

#[test]
fn test_unobserved_statuses_are_absent() {
    let summary = summarize(&[item("a", 2, 2, RiskStatus::InProgress)]);

    assert_eq!(summary.by_status.len(), 1);
    assert!(!summary.by_status.contains_key(&RiskStatus::Open));
    assert_eq!(summary.status_count(RiskStatus::Open), 0);
}

#[test]
fn test_uses_stored_level_name() {
    let mut risk = item("a", 9, 9, RiskStatus::Open);
    risk.risk_level = "LOW".to_string();

    let summary = summarize(&[risk]);

    assert_eq!(summary.by_level["LOW"], 1);
    assert_eq!(summary.by_level["HIGHEST"], 0);
}

#[test]
fn test_unknown_stored_level_gets_own_entry() {
    let mut risk = item("a", 2, 2, RiskStatus::Open);
    risk.risk_level = "CRITICAL".to_string();

    let summary = summarize(&[risk]);

    assert_eq!(summary.by_level["CRITICAL"], 1);
    assert_eq!(summary.by_level.len(), RISK_LEVELS.len() + 1);
    assert_eq!(summary.level_counts().iter().map(|(_, n)| n).sum::<usize>(), 0);
}

#[test]
fn test_level_counts_in_threshold_order() {
    let summary = summarize(&[item("a", 2, 3, RiskStatus::Open)]);

    let ordered: Vec<(&str, usize)> = summary
        .level_counts()
        .into_iter()
        .map(|(level, count)| (level.name, count))
        .collect();
    assert_eq!(
        ordered,
        vec![
            ("LOWEST", 0),
            ("VERY LOW", 0),
            ("LOW", 0),
            ("MEDIUM LOW", 0),
            ("MEDIUM HIGH", 1),
            ("HIGHEST", 0),
        ]
    );
}

#[test]
fn test_summary_serializes_status_labels() {
    let summary = summarize(&[item("a", 2, 3, RiskStatus::InProgress)]);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["total"], 1);
    assert_eq!(json["byStatus"]["In Progress"], 1);
    assert_eq!(json["byLevel"]["MEDIUM HIGH"], 1);
}
