//! Error types for the huffcode system.
//!
//! All operations return structured errors rather than panicking.
//! A failed run surfaces its error to the caller before any output
//! is produced.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Codec: frequency counting, tree construction, encoding
/// - Table: symbol table serialization, parsing, or inversion
/// - I/O: underlying read/write failures
#[derive(Debug, Error)]
pub enum Error {
    /// Codec pipeline error (e.g., out-of-range symbol, empty input)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Symbol table error (e.g., corrupt header, duplicate code)
    #[error("symbol table error: {0}")]
    Table(#[from] TableError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec pipeline errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input character falls outside the 7-bit alphabet
    #[error("symbol {symbol:#x} at position {position} outside the 7-bit alphabet")]
    SymbolOutOfRange { symbol: u32, position: usize },

    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty input: no symbols to encode")]
    EmptyInput,

    /// Remove on an empty priority queue
    #[error("remove on empty priority queue")]
    QueueUnderflow,

    /// Encoder found a character with no symbol table entry
    #[error("no code assigned for symbol {symbol:?}")]
    MissingCode { symbol: char },
}

/// Symbol table serialization and inversion errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// Table section is missing or its header line is malformed
    #[error("missing or malformed table header")]
    MissingHeader,

    /// Header magic doesn't match
    #[error("invalid table magic: expected HUFTAB, got {actual:?}")]
    InvalidMagic { actual: String },

    /// Header declares an unknown format version
    #[error("unsupported table version {version}")]
    UnsupportedVersion { version: u32 },

    /// Header declares more entries than the section contains
    #[error("table entry count mismatch: header says {expected}, got {actual}")]
    EntryCountMismatch { expected: usize, actual: usize },

    /// Entry line has a missing, unparsable, or out-of-range symbol
    #[error("invalid symbol on table line {line}: {value:?}")]
    InvalidSymbol { line: usize, value: String },

    /// Entry code contains characters other than '0' and '1'
    #[error("invalid code on table line {line}: {code:?}")]
    InvalidCode { line: usize, code: String },

    /// Two symbols share one code, so the table cannot be inverted
    #[error("duplicate code {code:?}: table is not injective")]
    DuplicateCode { code: String },

    /// Blank separator line between table and token stream is missing
    #[error("missing separator between table section and token stream")]
    MissingSeparator,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
