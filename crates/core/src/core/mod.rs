//! Core data structures for word-level BPE training.
//!
//! This module contains the symbol model, the word vocabulary that merges
//! are applied to, and the ordering used to pick the winning pair.

pub mod candidate;
pub mod symbol;
pub mod vocab;

pub use candidate::MergeCandidate;
pub use symbol::{initial_symbols, merged_symbol, pair, Pair, Symbol, END_OF_WORD};
pub use vocab::{WordEntry, WordVocabulary};
