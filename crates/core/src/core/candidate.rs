//! Merge candidates and their selection order.

use crate::core::symbol::Pair;
use std::cmp::Ordering;

/// A pair together with its aggregate frequency in the current vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeCandidate {
    /// The adjacent pair of symbols
    pub pair: Pair,
    /// Aggregate frequency of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Greater = preferred: higher count first, then the lexicographically
// smaller (left, right) pair, so `max()` picks the same winner on every run.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
