//! Bpelearn-training - BPE training infrastructure
//!
//! This crate provides the merge loop for learning BPE segmentations from a
//! whitespace-tokenized corpus, plus corpus loading and vocabulary output.
//!
//! # Features
//!
//! - Pair frequency counting with parallel processing support
//! - Deterministic greedy merge selection with a bounded merge budget
//! - Corpus loading and JSON / text listing output of the final vocabulary
//!
//! # Example
//!
//! ```rust
//! use bpelearn_training::BpeTrainer;
//!
//! let outcome = BpeTrainer::with_merges(2).train(["low low lower"]);
//! assert_eq!(outcome.merges_performed(), 2);
//! assert_eq!(outcome.vocabulary.get("low").unwrap().printable(), "low </w>");
//! ```

pub use bpelearn_core::{BpeError, Result, WordVocabulary};

// Training infrastructure
pub mod training;
pub use training::{
    parse_merge_budget, BpeTrainer, PairStatistics, StopReason, TrainingConfig, TrainingOutcome,
};

// Corpus loading and vocabulary output
pub mod io;
pub use io::{corpus_from_reader, load_corpus, VocabularySaver};
