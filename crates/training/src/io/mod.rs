//! Corpus loading and vocabulary output.
//!
//! Training itself never touches the filesystem; these helpers sit at the
//! boundary and turn I/O failures into [`BpeError`](crate::BpeError) values.

pub mod load;
pub mod save;

pub use load::{corpus_from_reader, load_corpus};
pub use save::VocabularySaver;
