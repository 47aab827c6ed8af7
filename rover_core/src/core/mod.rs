//! # Core traits shared across rover crates
//!
//! - **LogSummary**: compact, allocation-light string form of a value for log lines

pub mod log_summary;

pub use log_summary::LogSummary;
