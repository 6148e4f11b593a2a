//! Risk items: the record model, its status, and construction/revision.

pub mod build;
pub mod model;
pub mod status;

pub use build::{build_risk_item, build_risk_item_at, validate_raw_input};
pub use model::{RawRiskInput, RiskDraft, RiskId, RiskItem};
pub use status::{ALL_STATUSES, ParseStatusError, RiskStatus};
