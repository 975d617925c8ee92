//! Symbol frequency measurement.
//!
//! The first stage of a compression run: scan the input text once and
//! produce a fixed-size occurrence table indexed by symbol value. The
//! alphabet is the 7-bit ASCII range; any character above it is a
//! precondition violation, not a recoverable condition.

use crate::error::{CodecError, Result};

/// Number of symbols in the alphabet (7-bit ASCII).
///
/// Every table bound in the crate derives from this constant, so widening
/// the alphabet is a one-line change.
pub const ALPHABET_SIZE: usize = 128;

/// Occurrence counts for every symbol in the alphabet.
///
/// Built once per compression run and read-only afterward. The sum of all
/// entries equals the length of the source text in characters.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count symbol occurrences in `text`.
    ///
    /// # Errors
    /// Returns `CodecError::SymbolOutOfRange` if any character's value
    /// falls outside `[0, ALPHABET_SIZE)`, reporting the offending symbol
    /// and its character position.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];

        for (position, ch) in text.chars().enumerate() {
            let value = ch as u32;
            if value >= ALPHABET_SIZE as u32 {
                return Err(CodecError::SymbolOutOfRange {
                    symbol: value,
                    position,
                }
                .into());
            }
            counts[value as usize] += 1;
        }

        Ok(Self { counts })
    }

    /// Occurrence count for one symbol.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total count across all symbols (equals the source text length).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct symbols that actually occur.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate `(symbol, weight)` pairs for every symbol with a non-zero
    /// count, in ascending symbol order.
    pub fn non_zero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_counts_match_text() {
        let table = FrequencyTable::from_text("aaabbc").unwrap();

        assert_eq!(table.count(b'a'), 3);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 0);
    }

    #[test]
    fn test_total_equals_text_length() {
        let text = "the quick brown fox\njumps over the lazy dog\n";
        let table = FrequencyTable::from_text(text).unwrap();

        assert_eq!(table.total(), text.len() as u64);
    }

    #[test]
    fn test_empty_text_builds_zero_table() {
        let table = FrequencyTable::from_text("").unwrap();

        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.non_zero().count(), 0);
    }

    #[test]
    fn test_out_of_range_symbol_reports_position() {
        let result = FrequencyTable::from_text("ab\u{e9}c");

        match result {
            Err(Error::Codec(CodecError::SymbolOutOfRange { symbol, position })) => {
                assert_eq!(symbol, 0xe9);
                assert_eq!(position, 2);
            }
            other => panic!("expected SymbolOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_non_zero_is_ascending() {
        let table = FrequencyTable::from_text("cba").unwrap();
        let symbols: Vec<u8> = table.non_zero().map(|(s, _)| s).collect();

        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_full_alphabet() {
        let text: String = (0u8..ALPHABET_SIZE as u8).map(|b| b as char).collect();
        let table = FrequencyTable::from_text(&text).unwrap();

        assert_eq!(table.distinct(), ALPHABET_SIZE);
        assert!(table.non_zero().all(|(_, w)| w == 1));
    }
}
