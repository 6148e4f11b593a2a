//! In-memory risk register and identifier generation.

pub mod ids;
pub mod register;

pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use register::{MAX_ID_ATTEMPTS, RegisterMetrics, RiskRegister, StoreError};
