#![forbid(unsafe_code)]

pub mod item;
pub mod scoring;
pub mod summary;
