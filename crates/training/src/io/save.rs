//! Output of trained vocabularies.
//!
//! A trained vocabulary is exposed as a mapping from the space-joined
//! segmentation to its count. This module writes that mapping either as
//! pretty JSON or as a plain text listing.

use bpelearn_core::{BpeError, Result, WordVocabulary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Vocabulary saver - handles writing trained vocabularies.
pub struct VocabularySaver<'a> {
    /// Vocabulary reference
    vocab: &'a WordVocabulary,
}

impl<'a> VocabularySaver<'a> {
    /// Create a new vocabulary saver.
    pub fn new(vocab: &'a WordVocabulary) -> Self {
        Self { vocab }
    }

    /// Save the printable mapping to `path` as pretty JSON.
    ///
    /// Parent directories are created as needed. Keys are sorted.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                BpeError::Save(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(path).map_err(|e| {
            BpeError::Save(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.vocab.to_printable_map())?;
        writer
            .flush()
            .map_err(|e| BpeError::Save(format!("Failed to write {}: {}", path.display(), e)))?;

        log::info!(
            "Saved {} vocabulary entries to {}",
            self.vocab.len(),
            path.display()
        );
        Ok(())
    }

    /// Render the printable mapping as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.vocab.to_printable_map())?)
    }

    /// Write a text listing in first-occurrence order.
    ///
    /// ```text
    /// Final Vocabulary:
    /// l o w </w> : 5
    /// ```
    pub fn write_listing<W: Write>(&self, mut writer: W) -> Result<()> {
        let io_err = |e: std::io::Error| BpeError::Save(format!("Failed to write listing: {}", e));

        writeln!(writer, "Final Vocabulary:").map_err(io_err)?;
        for (symbols, count) in self.vocab.printable_entries() {
            writeln!(writer, "{} : {}", symbols, count).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_listing() {
        let vocab = WordVocabulary::from_lines(["low low new"]);
        let mut out = Vec::new();

        VocabularySaver::new(&vocab).write_listing(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Final Vocabulary:\nl o w </w> : 2\nn e w </w> : 1\n");
    }

    #[test]
    fn test_listing_of_empty_vocabulary() {
        let vocab = WordVocabulary::new();
        let mut out = Vec::new();

        VocabularySaver::new(&vocab).write_listing(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Final Vocabulary:\n");
    }

    #[test]
    fn test_save_json_roundtrip() {
        let temp_dir = std::env::temp_dir().join("bpelearn_test_save");
        let path = temp_dir.join("nested").join("vocab.json");

        let mut vocab = WordVocabulary::from_lines(["low low lowest"]);
        vocab.apply_merge(&bpelearn_core::pair("l", "o"));
        VocabularySaver::new(&vocab).save_json(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: BTreeMap<String, u64> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, vocab.to_printable_map());
        assert_eq!(loaded.get("lo w </w>"), Some(&2));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_to_json_marker_is_literal() {
        let vocab = WordVocabulary::from_lines(["a"]);
        let json = VocabularySaver::new(&vocab).to_json().unwrap();
        assert!(json.contains("\"a </w>\": 1"));
    }
}
