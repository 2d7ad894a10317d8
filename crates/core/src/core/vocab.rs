//! Word vocabulary storage and in-place merging.
//!
//! This module provides the word-level vocabulary used during training: one
//! entry per distinct surface word, holding its current segmentation and its
//! occurrence count. Entries keep first-occurrence order.

use crate::core::symbol::{initial_symbols, merged_symbol, Pair, Symbol};
use ahash::{AHashMap, AHashSet};
use compact_str::CompactString;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// A distinct corpus word with its current segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Original surface word (identity key)
    pub word: CompactString,
    /// Current segmentation
    pub symbols: Vec<Symbol>,
    /// Number of occurrences in the corpus
    pub count: u64,
}

impl WordEntry {
    /// Create an entry for a word seen once, segmented into characters.
    pub fn new(word: &str) -> Self {
        Self {
            word: CompactString::new(word),
            symbols: initial_symbols(word),
            count: 1,
        }
    }

    /// Space-joined segmentation, e.g. `"l o w </w>"`.
    pub fn printable(&self) -> String {
        let mut out = String::with_capacity(self.symbols.iter().map(|s| s.len() + 1).sum());
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(symbol);
        }
        out
    }

    /// Number of symbols in the current segmentation.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the segmentation is empty (never true for built entries).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether `pair` occurs adjacently in this entry.
    pub fn contains_pair(&self, pair: &Pair) -> bool {
        self.symbols
            .windows(2)
            .any(|w| w[0] == pair.0 && w[1] == pair.1)
    }

    /// Replace every adjacent occurrence of `pair` with `merged`, left to right.
    ///
    /// A freshly merged symbol is skipped over and never takes part in another
    /// match during the same pass. Returns the number of replacements.
    fn merge_pair(&mut self, pair: &Pair, merged: &Symbol) -> usize {
        if !self.contains_pair(pair) {
            return 0;
        }

        let mut replaced = 0;
        let mut rewritten = Vec::with_capacity(self.symbols.len());
        let mut symbols = std::mem::take(&mut self.symbols).into_iter().peekable();

        while let Some(symbol) = symbols.next() {
            if symbol == pair.0 && symbols.peek().is_some_and(|next| *next == pair.1) {
                symbols.next();
                rewritten.push(merged.clone());
                replaced += 1;
            } else {
                rewritten.push(symbol);
            }
        }

        self.symbols = rewritten;
        replaced
    }
}

/// Word vocabulary: distinct words with segmentations and counts.
#[derive(Debug, Clone, Default)]
pub struct WordVocabulary {
    /// Entries in first-occurrence order
    entries: Vec<WordEntry>,
    /// Surface word -> position in `entries`
    index: AHashMap<CompactString, usize>,
}

impl WordVocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity for `capacity` distinct words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Build a vocabulary from corpus lines.
    ///
    /// Each line is split on whitespace; repeated words accumulate counts.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for line in lines {
            vocab.add_text(line.as_ref());
        }
        vocab
    }

    /// Add every whitespace-delimited word of `text`.
    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.add_word(word);
        }
    }

    /// Add a single occurrence of `word`.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].count += 1;
            return;
        }

        self.index
            .insert(CompactString::new(word), self.entries.len());
        self.entries.push(WordEntry::new(word));
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-occurrence order.
    #[inline]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Look up the entry for a surface word.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&pos| &self.entries[pos])
    }

    /// Sum of all word counts (number of corpus tokens).
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Total symbol occurrences across all segmentations.
    pub fn symbol_count(&self) -> usize {
        self.entries.iter().map(WordEntry::len).sum()
    }

    /// Number of adjacent positions across all segmentations.
    pub fn pair_positions(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.len().saturating_sub(1))
            .sum()
    }

    /// Set of distinct symbols used by any segmentation.
    pub fn distinct_symbols(&self) -> AHashSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.symbols.iter().map(|s| s.as_str()))
            .collect()
    }

    /// Merge `pair` in every entry, sequentially.
    ///
    /// Entries without the pair pass through unchanged. Returns the total
    /// number of replacements.
    pub fn apply_merge(&mut self, pair: &Pair) -> usize {
        let merged = merged_symbol(pair);
        let replaced = self
            .entries
            .iter_mut()
            .map(|entry| entry.merge_pair(pair, &merged))
            .sum();

        self.report_merge(pair, replaced);
        replaced
    }

    /// Merge `pair` in every entry, rewriting entries in parallel.
    ///
    /// Produces exactly the same vocabulary as [`WordVocabulary::apply_merge`].
    pub fn apply_merge_parallel(&mut self, pair: &Pair) -> usize {
        let merged = merged_symbol(pair);
        let replaced = self
            .entries
            .par_iter_mut()
            .map(|entry| entry.merge_pair(pair, &merged))
            .sum();

        self.report_merge(pair, replaced);
        replaced
    }

    fn report_merge(&self, pair: &Pair, replaced: usize) {
        if replaced == 0 {
            log::warn!(
                "merge ({:?}, {:?}) matched no entry; vocabulary unchanged",
                pair.0.as_str(),
                pair.1.as_str()
            );
        }
    }

    /// Printable `(segmentation, count)` pairs in first-occurrence order.
    pub fn printable_entries(&self) -> impl Iterator<Item = (String, u64)> + '_ {
        self.entries.iter().map(|e| (e.printable(), e.count))
    }

    /// Printable mapping from space-joined segmentation to count.
    pub fn to_printable_map(&self) -> BTreeMap<String, u64> {
        self.printable_entries().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::pair;

    #[test]
    fn test_add_word_accumulates() {
        let mut vocab = WordVocabulary::new();
        vocab.add_word("low");
        vocab.add_word("low");
        vocab.add_word("new");

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("low").unwrap().count, 2);
        assert_eq!(vocab.get("new").unwrap().count, 1);
        assert_eq!(vocab.total_count(), 3);
    }

    #[test]
    fn test_from_lines_splits_on_whitespace() {
        let vocab = WordVocabulary::from_lines(["  low\tlow \n", "", "newer   low"]);

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.total_count(), 4);
        assert_eq!(vocab.entries()[0].word, "low");
        assert_eq!(vocab.entries()[1].word, "newer");
        assert_eq!(vocab.entries()[1].printable(), "n e w e r </w>");
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = WordVocabulary::from_lines(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab.total_count(), 0);
        assert!(vocab.to_printable_map().is_empty());
    }

    #[test]
    fn test_apply_merge_left_to_right() {
        let mut vocab = WordVocabulary::from_lines(["aaa"]);
        let replaced = vocab.apply_merge(&pair("a", "a"));

        // Overlapping run: only the leftmost occurrence merges.
        assert_eq!(replaced, 1);
        assert_eq!(vocab.entries()[0].printable(), "aa a </w>");
    }

    #[test]
    fn test_apply_merge_all_occurrences() {
        let mut vocab = WordVocabulary::from_lines(["abab"]);
        let replaced = vocab.apply_merge(&pair("a", "b"));

        assert_eq!(replaced, 2);
        assert_eq!(vocab.entries()[0].symbols, vec!["ab", "ab", "</w>"]);
    }

    #[test]
    fn test_apply_merge_long_run() {
        let word = "a".repeat(10_001);
        let mut vocab = WordVocabulary::from_lines([word.as_str()]);
        let replaced = vocab.apply_merge(&pair("a", "a"));

        let symbols = &vocab.entries()[0].symbols;
        assert_eq!(replaced, 5_000);
        assert_eq!(symbols.len(), 5_002);
        assert!(symbols[..5_000].iter().all(|s| s == "aa"));
        assert_eq!(symbols[5_000], "a");
        assert_eq!(symbols[5_001], "</w>");
    }

    #[test]
    fn test_apply_merge_does_not_cross_symbol_boundaries() {
        let mut vocab = WordVocabulary::from_lines(["abc"]);
        vocab.apply_merge(&pair("a", "b"));

        // "b c" no longer exists as adjacent symbols: "b" is inside "ab".
        let replaced = vocab.apply_merge(&pair("b", "c"));
        assert_eq!(replaced, 0);
        assert_eq!(vocab.entries()[0].printable(), "ab c </w>");
    }

    #[test]
    fn test_apply_merge_absent_pair_is_noop() {
        let mut vocab = WordVocabulary::from_lines(["low new"]);
        let before = vocab.to_printable_map();

        assert_eq!(vocab.apply_merge(&pair("x", "y")), 0);
        assert_eq!(vocab.to_printable_map(), before);
    }

    #[test]
    fn test_apply_merge_parallel_matches_sequential() {
        let lines = ["low lower lowest newer wider", "newest low low"];
        let mut sequential = WordVocabulary::from_lines(lines);
        let mut parallel = WordVocabulary::from_lines(lines);

        for p in [pair("w", "e"), pair("l", "o"), pair("lo", "w")] {
            assert_eq!(sequential.apply_merge(&p), parallel.apply_merge_parallel(&p));
        }

        assert_eq!(sequential.entries(), parallel.entries());
    }

    #[test]
    fn test_merge_with_end_marker() {
        let mut vocab = WordVocabulary::from_lines(["a"]);
        vocab.apply_merge(&pair("a", "</w>"));

        assert_eq!(vocab.entries()[0].symbols, vec!["a</w>"]);
        assert_eq!(vocab.pair_positions(), 0);
    }

    #[test]
    fn test_symbol_accounting() {
        let vocab = WordVocabulary::from_lines(["ab ab c"]);

        assert_eq!(vocab.symbol_count(), 5);
        assert_eq!(vocab.pair_positions(), 3);

        let symbols = vocab.distinct_symbols();
        assert_eq!(symbols.len(), 4);
        assert!(symbols.contains("</w>"));
    }

    #[test]
    fn test_printable_entries_order() {
        let vocab = WordVocabulary::from_lines(["b a b"]);
        let printed: Vec<_> = vocab.printable_entries().collect();

        assert_eq!(
            printed,
            vec![("b </w>".to_string(), 2), ("a </w>".to_string(), 1)]
        );
    }
}
