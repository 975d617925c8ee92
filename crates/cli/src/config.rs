//! Configuration for the huffcode command line.
//!
//! Two invocation forms are accepted:
//!
//! ```text
//! huffcode compress   <inputFile> <outputFile>
//! huffcode decompress <inputFile> <outputFile>
//! ```
//!
//! Missing arguments print a usage hint and perform no work; that is a
//! usage condition, not a fault.

use std::path::PathBuf;

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to compress or decompress
    pub mode: Mode,

    /// Input file path
    pub input: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Whether to print the run summary after compressing
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// already stripped).
    ///
    /// Returns `Ok(None)` when usage was printed and no work should run;
    /// `Err` carries a message for genuinely malformed invocations.
    pub fn from_args(args: &[String]) -> Result<Option<Self>, String> {
        let mut positional = Vec::new();
        let mut print_stats = true;

        for arg in args {
            match arg.as_str() {
                "--quiet" => print_stats = false,
                "--help" | "-h" => {
                    print_usage();
                    return Ok(None);
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag: {other}"));
                }
                _ => positional.push(arg.clone()),
            }
        }

        if positional.len() < 3 {
            print_usage();
            return Ok(None);
        }

        let mode = match positional[0].as_str() {
            "compress" => Mode::Compress,
            "decompress" => Mode::Decompress,
            other => return Err(format!("unknown mode: {other}")),
        };

        Ok(Some(Config {
            mode,
            input: PathBuf::from(&positional[1]),
            output: PathBuf::from(&positional[2]),
            print_stats,
        }))
    }
}

/// Print the usage hint.
pub fn print_usage() {
    println!("huffcode: static Huffman coder for ASCII text");
    println!();
    println!("USAGE:");
    println!("    huffcode compress   <inputFile> <outputFile>");
    println!("    huffcode decompress <inputFile> <outputFile>");
    println!();
    println!("OPTIONS:");
    println!("    --quiet       Don't print the compression summary");
    println!("    --help, -h    Print this help");
}
