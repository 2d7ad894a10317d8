//! Symbols and symbol pairs.
//!
//! A symbol is an immutable string token. Words start out as one symbol per
//! character followed by the end-of-word marker; merges concatenate adjacent
//! symbols into longer ones.

use compact_str::CompactString;

/// An atomic token of a word's current segmentation.
pub type Symbol = CompactString;

/// Two adjacent symbols, ordered left to right.
pub type Pair = (Symbol, Symbol);

/// Sentinel appended to every word so merges never cross word boundaries.
pub const END_OF_WORD: &str = "</w>";

/// Build the initial segmentation of a word: one symbol per character, then `</w>`.
pub fn initial_symbols(word: &str) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = word
        .chars()
        .map(|c| {
            let mut buf = [0u8; 4];
            CompactString::new(c.encode_utf8(&mut buf))
        })
        .collect();
    symbols.push(CompactString::new(END_OF_WORD));
    symbols
}

/// Concatenate a pair into the symbol that replaces it (no separator).
#[inline]
pub fn merged_symbol(pair: &Pair) -> Symbol {
    let mut merged = CompactString::with_capacity(pair.0.len() + pair.1.len());
    merged.push_str(&pair.0);
    merged.push_str(&pair.1);
    merged
}

/// Convenience constructor for a pair from string slices.
#[inline]
pub fn pair(left: &str, right: &str) -> Pair {
    (CompactString::new(left), CompactString::new(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_symbols() {
        let symbols = initial_symbols("low");
        assert_eq!(symbols, vec!["l", "o", "w", "</w>"]);
    }

    #[test]
    fn test_single_character_keeps_marker() {
        assert_eq!(initial_symbols("a"), vec!["a", "</w>"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(initial_symbols("né"), vec!["n", "é", "</w>"]);
    }

    #[test]
    fn test_merged_symbol() {
        assert_eq!(merged_symbol(&pair("e", "r")), "er");
        assert_eq!(merged_symbol(&pair("er", "</w>")), "er</w>");
    }
}
