//! Text-to-token-stream encoding and the full compression pipeline.
//!
//! Each input character is replaced by its code string followed by a
//! single space, in input order. The persisted artifact is the symbol
//! table section, one blank separator line, then the token stream. The
//! entire artifact is rendered before the first byte reaches the sink,
//! so a failed run produces no partial output.

use crate::codes::assign_codes;
use crate::error::{CodecError, Result};
use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::stats::CompressionStats;
use crate::table::SymbolTable;
use crate::tree::HuffmanTree;
use std::io::Write;

/// Render `text` as a whitespace-delimited token stream.
///
/// One token per input character, each followed by a single space.
///
/// # Errors
/// Returns `CodecError::MissingCode` if any character has no table entry.
/// This cannot occur when the table was built from the same text's
/// frequency table, but is checked regardless.
pub fn encode_tokens(text: &str, table: &SymbolTable) -> Result<String> {
    let mut stream = String::new();

    for ch in text.chars() {
        let value = ch as u32;
        let code = if value < ALPHABET_SIZE as u32 {
            table.code(value as u8)
        } else {
            None
        };
        let code = code.ok_or(CodecError::MissingCode { symbol: ch })?;

        stream.push_str(code);
        stream.push(' ');
    }

    Ok(stream)
}

/// Run the full compression pipeline and write the artifact to `out`.
///
/// Pipeline: frequency table, Huffman tree, code assignment, token
/// rendering, then a single write of table section + blank separator +
/// token stream.
///
/// # Errors
/// Propagates every pipeline failure (out-of-range symbol, empty input,
/// missing code) before anything is written; I/O failures surface as
/// `Error::Io`.
pub fn compress(text: &str, out: &mut impl Write) -> Result<CompressionStats> {
    let freqs = FrequencyTable::from_text(text)?;
    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let table = assign_codes(&tree);
    let stream = encode_tokens(text, &table)?;

    let mut section = Vec::new();
    table.write_to(&mut section)?;

    out.write_all(&section)?;
    out.write_all(b"\n")?;
    out.write_all(stream.as_bytes())?;

    Ok(CompressionStats {
        input_chars: freqs.total() as usize,
        distinct_symbols: table.len(),
        table_bytes: section.len() + 1,
        stream_bytes: stream.len(),
    })
}
