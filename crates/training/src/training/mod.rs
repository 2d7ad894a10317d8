//! Training infrastructure for word-level BPE.
//!
//! This module provides pair counting and the greedy merge loop.

pub mod stats;
pub mod trainer;

pub use stats::PairStatistics;
pub use trainer::{parse_merge_budget, BpeTrainer, StopReason, TrainingConfig, TrainingOutcome};
