//! Run statistics for a compression pass.
//!
//! Collected by the encoder and printed by the CLI at the end of a run.
//! The delimited token format trades size for readability, so the "ratio"
//! here is usually above 1.0; the summary makes that visible instead of
//! hiding it.

/// Counters describing one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Characters read from the source text
    pub input_chars: usize,

    /// Distinct symbols assigned a code
    pub distinct_symbols: usize,

    /// Bytes written for the table section plus separator
    pub table_bytes: usize,

    /// Bytes written for the token stream
    pub stream_bytes: usize,
}

impl CompressionStats {
    /// Total bytes written to the output sink.
    pub fn output_bytes(&self) -> usize {
        self.table_bytes + self.stream_bytes
    }

    /// Output size relative to input size (output bytes per input char).
    ///
    /// Returns 0.0 when no input was consumed.
    pub fn ratio(&self) -> f64 {
        if self.input_chars == 0 {
            0.0
        } else {
            self.output_bytes() as f64 / self.input_chars as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression Summary ===");
        println!("Input:  {} chars", self.input_chars);
        println!("Output: {} bytes", self.output_bytes());
        println!(
            "  table section: {} bytes, token stream: {} bytes",
            self.table_bytes, self.stream_bytes
        );
        println!("Distinct symbols: {}", self.distinct_symbols);
        println!("Ratio: {:.2}x", self.ratio());
    }
}
