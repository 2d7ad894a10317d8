//! Bpelearn-core - Data model for word-level BPE training
//!
//! This crate provides the fundamental data structures for learning
//! byte-pair-encoding merges over a whitespace-tokenized corpus.
//!
//! # Features
//!
//! - Word vocabulary keyed by surface word, with `CompactString` symbols
//! - Structural left-to-right merge application, sequential or parallel
//! - Deterministic merge-candidate ordering
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use bpelearn_core::{pair, WordVocabulary};
//!
//! let mut vocab = WordVocabulary::from_lines(["low lower"]);
//! vocab.apply_merge(&pair("l", "o"));
//! assert_eq!(vocab.entries()[0].printable(), "lo w </w>");
//! ```

pub mod error;
pub use error::{BpeError, Result};

pub mod core;
pub use crate::core::{
    initial_symbols, merged_symbol, pair, MergeCandidate, Pair, Symbol, WordEntry,
    WordVocabulary, END_OF_WORD,
};
