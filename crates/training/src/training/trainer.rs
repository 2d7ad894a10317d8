//! BPE trainer implementation.
//!
//! This module implements the greedy merge loop: every round recomputes pair
//! statistics from the current vocabulary, picks the most frequent pair and
//! merges it everywhere, until the merge budget is spent or no adjacent
//! pairs remain.

use super::stats::PairStatistics;
use bpelearn_core::{BpeError, MergeCandidate, Result, WordVocabulary};
use std::time::Instant;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Maximum number of merge steps (K)
    pub num_merges: usize,
    /// Whether to use parallel processing
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_merges: 10,
            parallel: false,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration with the given merge budget.
    pub fn with_merges(num_merges: usize) -> Self {
        Self {
            num_merges,
            ..Default::default()
        }
    }

    /// Create a configuration from a signed merge budget.
    ///
    /// Negative budgets are rejected before any training happens.
    pub fn from_budget(budget: i64) -> Result<Self> {
        let num_merges = usize::try_from(budget).map_err(|_| {
            BpeError::InvalidArgument(format!(
                "merge budget must be non-negative, got {}",
                budget
            ))
        })?;

        Ok(Self::with_merges(num_merges))
    }

    /// Enable or disable parallel processing.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Parse a merge budget typed by a user, e.g. `"10"`.
pub fn parse_merge_budget(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let budget: i64 = trimmed.parse().map_err(|_| {
        BpeError::InvalidArgument(format!(
            "merge budget must be an integer, got {:?}",
            trimmed
        ))
    })?;

    TrainingConfig::from_budget(budget).map(|config| config.num_merges)
}

/// Why the merge loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All `num_merges` steps were performed
    BudgetReached,
    /// No adjacent pairs remained before the budget was spent
    Exhausted,
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// The final vocabulary
    pub vocabulary: WordVocabulary,
    /// Winning candidates, in the order they were merged
    pub merges: Vec<MergeCandidate>,
    /// Why training stopped
    pub stop_reason: StopReason,
}

impl TrainingOutcome {
    /// Number of merge steps actually performed.
    pub fn merges_performed(&self) -> usize {
        self.merges.len()
    }
}

/// BPE trainer.
///
/// Learns merges over a word vocabulary by iteratively merging the most
/// frequent adjacent symbol pair.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new trainer with the given merge budget.
    pub fn with_merges(num_merges: usize) -> Self {
        Self::new(TrainingConfig::with_merges(num_merges))
    }

    /// Get the configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on corpus lines.
    ///
    /// # Arguments
    /// * `lines` - Corpus lines; words are whitespace-delimited
    ///
    /// # Returns
    /// The final vocabulary, the merges performed and the stop reason
    pub fn train<I, S>(&self, lines: I) -> TrainingOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.train_vocabulary(WordVocabulary::from_lines(lines))
    }

    /// Continue training from an existing vocabulary.
    pub fn train_vocabulary(&self, mut vocab: WordVocabulary) -> TrainingOutcome {
        let start = Instant::now();
        log::info!(
            "Starting BPE training: {} words ({} tokens), up to {} merges",
            vocab.len(),
            vocab.total_count(),
            self.config.num_merges
        );

        let mut merges: Vec<MergeCandidate> =
            Vec::with_capacity(self.config.num_merges.min(1 << 16));
        let mut stop_reason = StopReason::BudgetReached;

        while merges.len() < self.config.num_merges {
            let stats = if self.config.parallel {
                PairStatistics::compute_parallel(&vocab)
            } else {
                PairStatistics::compute(&vocab)
            };

            let candidate = match stats.best() {
                Some(c) => c,
                None => {
                    stop_reason = StopReason::Exhausted;
                    break;
                }
            };

            log::debug!(
                "merge {}: ({:?}, {:?}) x{}",
                merges.len() + 1,
                candidate.pair.0.as_str(),
                candidate.pair.1.as_str(),
                candidate.count
            );

            if self.config.parallel {
                vocab.apply_merge_parallel(&candidate.pair);
            } else {
                vocab.apply_merge(&candidate.pair);
            }

            merges.push(candidate);
        }

        log::info!(
            "Finished training: {} merges in {:.2}s ({:?})",
            merges.len(),
            start.elapsed().as_secs_f64(),
            stop_reason
        );

        TrainingOutcome {
            vocabulary: vocab,
            merges,
            stop_reason,
        }
    }
}
