//! Risk register: the session's collection of risk items.
//!
//! The register is a value. Every mutation borrows the current register and
//! returns a new one; the caller swaps it in wholesale, so no reader ever
//! sees a half-applied change and a failed mutation leaves the old value
//! untouched.
//!
//! Identifier rules:
//! 1) Ids come from an `IdGenerator`, never from the engine.
//! 2) An id already issued this session (including removed items) is never
//!    handed out again; the generator is retried up to `MAX_ID_ATTEMPTS`.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use riskboard_core::item::{RawRiskInput, RiskDraft, RiskId, RiskItem, RiskStatus};
use riskboard_core::summary::{RiskSummary, summarize};
use thiserror::Error;

use super::ids::IdGenerator;

/// Generator retries before an id collision is reported.
pub const MAX_ID_ATTEMPTS: usize = 8;

// --- Errors -------------------------------------------------------------

/// Register operation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item with this id in the register.
    #[error("risk '{0}' not found")]
    NotFound(RiskId),
    /// The generator kept producing ids that were already issued.
    #[error("id generator repeated already-issued id '{0}'")]
    DuplicateId(RiskId),
}

// --- Metrics ------------------------------------------------------------

/// Operation counters for the register.
#[derive(Debug, Default)]
pub struct RegisterMetrics {
    adds_total: u64,
    updates_total: u64,
    status_changes_total: u64,
    removals_total: u64,
    imports_total: u64,
    id_collisions_total: u64,
}

impl RegisterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adds_total(&self) -> u64 {
        self.adds_total
    }

    pub fn updates_total(&self) -> u64 {
        self.updates_total
    }

    pub fn status_changes_total(&self) -> u64 {
        self.status_changes_total
    }

    pub fn removals_total(&self) -> u64 {
        self.removals_total
    }

    /// Bulk appends (one per `add_all` call).
    pub fn imports_total(&self) -> u64 {
        self.imports_total
    }

    /// Repeated ids seen from the generator. Counted even when the add that
    /// hit them fails and is rolled back.
    pub fn id_collisions_total(&self) -> u64 {
        self.id_collisions_total
    }

    fn record_add(&mut self) {
        self.adds_total += 1;
    }

    fn record_update(&mut self) {
        self.updates_total += 1;
    }

    fn record_status_change(&mut self) {
        self.status_changes_total += 1;
    }

    fn record_removal(&mut self) {
        self.removals_total += 1;
    }

    fn record_import(&mut self) {
        self.imports_total += 1;
    }

    fn record_id_collision(&mut self) {
        self.id_collisions_total += 1;
    }
}

// --- Register -----------------------------------------------------------

/// Ordered collection of risk items (insertion order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskRegister {
    items: Vec<RiskItem>,
    issued: BTreeSet<RiskId>,
}

impl RiskRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[RiskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RiskId) -> Option<&RiskItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &RiskId) -> bool {
        self.get(id).is_some()
    }

    /// Whether `id` was ever issued by this register, even if since removed.
    pub fn was_issued(&self, id: &RiskId) -> bool {
        self.issued.contains(id)
    }

    /// Summary counts over the current items.
    pub fn summary(&self) -> RiskSummary {
        summarize(&self.items)
    }

    /// Append a draft under a fresh id.
    pub fn add(
        &self,
        draft: RiskDraft,
        ids: &mut impl IdGenerator,
        metrics: &mut RegisterMetrics,
    ) -> Result<(RiskRegister, RiskId), StoreError> {
        let mut next = self.clone();
        let id = next.issue_id(ids, metrics)?;
        next.items.push(draft.into_item(id.clone()));
        metrics.record_add();
        tracing::info!(risk_id = %id, "risk added");
        Ok((next, id))
    }

    /// Append drafts in order (bulk import). All-or-nothing: on an id
    /// collision nothing is added and the add/import counters are untouched;
    /// `id_collisions_total` still records the repeats.
    pub fn add_all(
        &self,
        drafts: Vec<RiskDraft>,
        ids: &mut impl IdGenerator,
        metrics: &mut RegisterMetrics,
    ) -> Result<(RiskRegister, Vec<RiskId>), StoreError> {
        let mut next = self.clone();
        let mut assigned = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let id = next.issue_id(ids, metrics)?;
            next.items.push(draft.into_item(id.clone()));
            assigned.push(id);
        }

        for _ in &assigned {
            metrics.record_add();
        }
        metrics.record_import();
        tracing::info!(count = assigned.len(), total = next.len(), "risks appended");
        Ok((next, assigned))
    }

    /// Replace an item's inputs and metadata, recomputing derived fields.
    pub fn update(
        &self,
        id: &RiskId,
        raw: RawRiskInput,
        now: DateTime<Utc>,
        metrics: &mut RegisterMetrics,
    ) -> Result<RiskRegister, StoreError> {
        let next = self.replace_item(id, |item| item.revise(raw, now))?;
        metrics.record_update();
        tracing::info!(risk_id = %id, "risk updated");
        Ok(next)
    }

    /// Change only an item's status.
    pub fn set_status(
        &self,
        id: &RiskId,
        status: RiskStatus,
        now: DateTime<Utc>,
        metrics: &mut RegisterMetrics,
    ) -> Result<RiskRegister, StoreError> {
        let next = self.replace_item(id, |item| item.with_status(status, now))?;
        metrics.record_status_change();
        tracing::info!(risk_id = %id, %status, "risk status changed");
        Ok(next)
    }

    /// Remove an item. Its id stays reserved for the rest of the session.
    pub fn remove(
        &self,
        id: &RiskId,
        metrics: &mut RegisterMetrics,
    ) -> Result<RiskRegister, StoreError> {
        if !self.contains(id) {
            return Err(StoreError::NotFound(id.clone()));
        }
        let mut next = self.clone();
        next.items.retain(|item| &item.id != id);
        metrics.record_removal();
        tracing::info!(risk_id = %id, "risk removed");
        Ok(next)
    }

    fn replace_item(
        &self,
        id: &RiskId,
        change: impl FnOnce(&RiskItem) -> RiskItem,
    ) -> Result<RiskRegister, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let mut next = self.clone();
        next.items[position] = change(&self.items[position]);
        Ok(next)
    }

    fn issue_id(
        &mut self,
        ids: &mut impl IdGenerator,
        metrics: &mut RegisterMetrics,
    ) -> Result<RiskId, StoreError> {
        let mut last = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = ids.next_id();
            if self.issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
            metrics.record_id_collision();
            tracing::warn!(risk_id = %candidate, "id generator repeated an issued id");
            last = Some(candidate);
        }
        Err(StoreError::DuplicateId(last.unwrap_or_else(|| RiskId::new(""))))
    }
}
