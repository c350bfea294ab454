//! Core reporting logic.
//!
//! This module contains:
//! - Aggregator: folds movie availability into a per-provider summary
//! - Runner: drives a full report run across adapters and sinks

pub mod aggregator;
pub mod runner;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use runner::{RunOutcome, Runner};
