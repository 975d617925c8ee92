//! huffcode CLI: compress and decompress ASCII text files.
//!
//! The binary reads the whole input into memory, runs the codec pipeline,
//! and writes the result in one shot, so a failed run never leaves a
//! partial output file behind.

mod config;

use config::{Config, Mode};
use huffcode_core::{decode, encode};
use std::fs;
use std::io::BufReader;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            config::print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffcode_core::Result<()> {
    match config.mode {
        Mode::Compress => {
            let text = fs::read_to_string(&config.input)?;

            let mut artifact = Vec::new();
            let stats = encode::compress(&text, &mut artifact)?;
            fs::write(&config.output, &artifact)?;

            if config.print_stats {
                stats.print_summary();
            }
        }
        Mode::Decompress => {
            let file = fs::File::open(&config.input)?;
            let text = decode::decompress(&mut BufReader::new(file))?;
            fs::write(&config.output, text)?;
        }
    }

    Ok(())
}
