//! Risk identifier generators.
//!
//! Uniqueness within a session is the only requirement; ids need not be
//! unguessable. The register rejects any id it has already issued, so a
//! generator only has to make collisions unlikely.

use riskboard_core::item::RiskId;
use uuid::Uuid;

/// Source of fresh risk identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> RiskId;
}

/// Random UUIDv4 identifiers. Default for interactive sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> RiskId {
        RiskId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter identifiers: `{prefix}-000001`, `{prefix}-000002`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RiskId {
        let id = RiskId::new(format!("{}-{:06}", self.prefix, self.next));
        // Saturates at u64::MAX; the register then reports the repeat as a
        // duplicate instead of wrapping back to issued ids.
        self.next = self.next.saturating_add(1);
        id
    }
}
