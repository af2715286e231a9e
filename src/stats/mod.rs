//! Shared run statistics for the benchmark harness
//!
//! This module provides a clean, modular approach to statistics:
//! - Thread-safe aggregation of per-operation timing samples
//! - Consistent point-in-time snapshots for the reporter
//! - Progress and final-result rendering

pub mod aggregate;
pub mod reporting;

// Re-export public types for easier access
pub use aggregate::{AggregateStats, StatsSnapshot};
