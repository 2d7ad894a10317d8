//! Pair statistics for BPE training.
//!
//! This module counts adjacent symbol-pair frequencies over a word
//! vocabulary, with support for parallel processing. Statistics are a
//! snapshot: they are computed fresh every round and never updated in place.

use ahash::AHashMap;
use bpelearn_core::{MergeCandidate, Pair, WordEntry, WordVocabulary};

/// Aggregate frequencies of adjacent symbol pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairStatistics {
    /// Pair -> frequency count
    pair_counts: AHashMap<Pair, u64>,
}

impl PairStatistics {
    /// Count all pairs sequentially.
    ///
    /// Every adjacent position of an entry adds the entry's count.
    pub fn compute(vocab: &WordVocabulary) -> Self {
        let mut pair_counts: AHashMap<Pair, u64> = AHashMap::new();

        for entry in vocab.entries() {
            count_entry(entry, &mut pair_counts);
        }

        Self { pair_counts }
    }

    /// Count all pairs in parallel.
    ///
    /// Each entry is counted independently and the partial maps are summed,
    /// so the result equals [`PairStatistics::compute`].
    pub fn compute_parallel(vocab: &WordVocabulary) -> Self {
        use rayon::prelude::*;

        let pair_counts = vocab
            .entries()
            .par_iter()
            .map(|entry| {
                let mut pair_counts: AHashMap<Pair, u64> = AHashMap::new();
                count_entry(entry, &mut pair_counts);
                pair_counts
            })
            .reduce(AHashMap::new, |mut acc, pair_counts| {
                for (pair, count) in pair_counts {
                    *acc.entry(pair).or_insert(0) += count;
                }
                acc
            });

        Self { pair_counts }
    }

    /// Get the frequency of a pair (0 if absent).
    pub fn get(&self, pair: &Pair) -> u64 {
        self.pair_counts.get(pair).copied().unwrap_or(0)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pair_counts.len()
    }

    /// Check if no adjacent pairs remain.
    pub fn is_empty(&self) -> bool {
        self.pair_counts.is_empty()
    }

    /// The winning merge: highest count, ties to the smallest `(left, right)`.
    pub fn best(&self) -> Option<MergeCandidate> {
        self.candidates().max()
    }

    /// The `n` best candidates, best first.
    pub fn top(&self, n: usize) -> Vec<MergeCandidate> {
        let mut candidates: Vec<MergeCandidate> = self.candidates().collect();

        candidates.sort_unstable_by(|a, b| b.cmp(a));
        candidates.truncate(n);
        candidates
    }

    fn candidates(&self) -> impl Iterator<Item = MergeCandidate> + '_ {
        self.pair_counts
            .iter()
            .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count))
    }

    /// Iterate over `(pair, count)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, u64)> + '_ {
        self.pair_counts.iter().map(|(pair, &count)| (pair, count))
    }
}

fn count_entry(entry: &WordEntry, pair_counts: &mut AHashMap<Pair, u64>) {
    for window in entry.symbols.windows(2) {
        let pair = (window[0].clone(), window[1].clone());
        *pair_counts.entry(pair).or_insert(0) += entry.count;
    }
}
