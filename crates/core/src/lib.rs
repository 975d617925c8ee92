//! huffcode-core: static Huffman coding for 7-bit ASCII text
//!
//! This library builds an optimal prefix-free binary code for the symbols
//! of an input text and uses it to transform the text into a compact,
//! human-readable token stream and back, losslessly. Codes are persisted
//! as whitespace-delimited tokens, not packed bits.
//!
//! # Architecture
//!
//! The pipeline runs through clear module boundaries:
//! - `freq`: frequency measurement over the fixed 128-symbol alphabet
//! - `heap`: array-backed min-heap priority queue
//! - `tree`: Huffman tree model and priority-queue-driven construction
//! - `codes`: code assignment by pure tree traversal
//! - `table`: symbol table, its persisted text form, and inversion
//! - `encode`: token-stream encoding and the compression pipeline
//! - `decode`: token-stream decoding and the decompression pipeline
//! - `stats`: per-run counters for reporting
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and surfaced to the caller
//! - **Run-local state**: every run owns its tables and tree exclusively;
//!   nothing is shared across concurrent runs
//! - **Deterministic**: equal-weight merges break by insertion order, so
//!   identical input always yields identical output

pub mod codes;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod heap;
pub mod stats;
pub mod table;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
pub use stats::CompressionStats;
