//! Corpus loading.
//!
//! This module reads a text corpus into memory as lines, ready to be
//! handed to the trainer.

use bpelearn_core::{BpeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a UTF-8 corpus file as a list of lines.
///
/// A missing or unreadable file is reported as
/// [`BpeError::SourceUnavailable`].
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|err| BpeError::SourceUnavailable {
        path: path.to_path_buf(),
        err,
    })?;

    let lines = corpus_from_reader(BufReader::new(file), path)?;
    log::info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read corpus lines from any buffered reader.
///
/// `source` names the reader in error messages.
pub fn corpus_from_reader<R: BufRead>(reader: R, source: impl AsRef<Path>) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|err| BpeError::SourceUnavailable {
            path: source.as_ref().to_path_buf(),
            err,
        })
}
