//! Symbol table and its persisted text form.
//!
//! The compression artifact opens with a serialized symbol table; the
//! decoder reads it back and inverts it before touching the token stream.
//!
//! # Section Format
//!
//! ```text
//! HUFTAB 1 <entry-count>
//! <symbol> <code>
//! ...            (entry-count lines, ascending symbol order)
//! ```
//!
//! The header names the format version and the exact number of entry
//! lines, so the section boundary is explicit rather than inferred from
//! incidental newline placement. `<symbol>` is the decimal symbol value;
//! `<code>` is its '0'/'1' code string. A degenerate empty code (single
//! symbol input) is written as a line with no code field.

use crate::error::{Result, TableError};
use crate::freq::ALPHABET_SIZE;
use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, Write};

/// Magic token opening the table section.
const MAGIC: &str = "HUFTAB";

/// Current table format version.
const VERSION: u32 = 1;

/// Mapping from symbol to its assigned binary code.
///
/// Built once from a completed Huffman tree and immutable afterward; keys
/// are exactly the symbols with non-zero frequency in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    codes: BTreeMap<u8, String>,
}

impl SymbolTable {
    /// Wrap a finished code assignment.
    pub(crate) fn from_codes(codes: BTreeMap<u8, String>) -> Self {
        Self { codes }
    }

    /// Code string for one symbol, if it occurs in the source text.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols with assigned codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(&s, code)| (s, code.as_str()))
    }

    /// Write the table section, header first.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{MAGIC} {VERSION} {}", self.codes.len())?;
        for (symbol, code) in &self.codes {
            if code.is_empty() {
                writeln!(out, "{symbol}")?;
            } else {
                writeln!(out, "{symbol} {code}")?;
            }
        }
        Ok(())
    }

    /// Parse a table section from `reader`, consuming exactly the header
    /// and its declared entry lines.
    ///
    /// # Errors
    /// - `TableError::MissingHeader` on a missing or malformed header line
    /// - `TableError::InvalidMagic` / `UnsupportedVersion` on a wrong magic
    ///   or version
    /// - `TableError::EntryCountMismatch` when the section ends early
    /// - `TableError::InvalidSymbol` / `InvalidCode` on a bad entry line
    pub fn parse_from(reader: &mut impl BufRead) -> Result<Self> {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(TableError::MissingHeader.into());
        }

        let mut fields = header.split_whitespace();
        match fields.next() {
            Some(MAGIC) => {}
            Some(other) => {
                return Err(TableError::InvalidMagic {
                    actual: other.to_string(),
                }
                .into())
            }
            None => return Err(TableError::MissingHeader.into()),
        }

        let version: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or(TableError::MissingHeader)?;
        if version != VERSION {
            return Err(TableError::UnsupportedVersion { version }.into());
        }

        let expected: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or(TableError::MissingHeader)?;

        let mut codes = BTreeMap::new();
        for index in 0..expected {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(TableError::EntryCountMismatch {
                    expected,
                    actual: index,
                }
                .into());
            }

            let line_no = index + 1;
            let mut parts = line.split_whitespace();

            let symbol: u32 = parts
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| TableError::InvalidSymbol {
                    line: line_no,
                    value: line.trim_end().to_string(),
                })?;
            if symbol >= ALPHABET_SIZE as u32 {
                return Err(TableError::InvalidSymbol {
                    line: line_no,
                    value: line.trim_end().to_string(),
                }
                .into());
            }

            let code = parts.next().unwrap_or("").to_string();
            if !code.chars().all(|c| c == '0' || c == '1') {
                return Err(TableError::InvalidCode {
                    line: line_no,
                    code,
                }
                .into());
            }

            codes.insert(symbol as u8, code);
        }

        Ok(Self { codes })
    }

    /// Invert the table into a code-to-symbol mapping.
    ///
    /// # Errors
    /// Returns `TableError::DuplicateCode` if two symbols share one code,
    /// which signals a corrupted or hand-edited table.
    pub fn invert(&self) -> Result<ReverseSymbolTable> {
        let mut map = HashMap::with_capacity(self.codes.len());
        for (&symbol, code) in &self.codes {
            if map.insert(code.clone(), symbol).is_some() {
                return Err(TableError::DuplicateCode { code: code.clone() }.into());
            }
        }
        Ok(ReverseSymbolTable { map })
    }
}

/// Mapping from code string to symbol, used for one decompression run.
#[derive(Debug, Clone)]
pub struct ReverseSymbolTable {
    map: HashMap<String, u8>,
}

impl ReverseSymbolTable {
    /// Symbol for one code string, if any.
    pub fn symbol(&self, code: &str) -> Option<u8> {
        self.map.get(code).copied()
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
