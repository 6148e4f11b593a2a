#![forbid(unsafe_code)]

pub mod import;
pub mod sample;
pub mod settings;
pub mod store;
pub mod telemetry;
