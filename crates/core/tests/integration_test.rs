//! Integration tests for the full huffcode pipeline.
//!
//! These tests verify end-to-end behavior: text -> frequency table ->
//! tree -> codes -> persisted artifact -> parsed table -> reconstructed
//! text, with verification that output matches input.

use huffcode_core::{
    codes::assign_codes,
    decode::decompress,
    encode::compress,
    error::{CodecError, Error, TableError},
    freq::{FrequencyTable, ALPHABET_SIZE},
    tree::HuffmanTree,
};
use std::io::BufReader;

fn round_trip(text: &str) -> String {
    let mut artifact = Vec::new();
    compress(text, &mut artifact).expect("compression failed");
    decompress(&mut BufReader::new(&artifact[..])).expect("decompression failed")
}

#[test]
fn test_round_trip_simple() {
    let text = "aaabbc";
    assert_eq!(round_trip(text), text);
}

#[test]
fn test_round_trip_sentence_with_newlines() {
    let text = "The quick brown fox\njumps over the lazy dog.\n";
    assert_eq!(round_trip(text), text);
}

#[test]
fn test_round_trip_repetitive_input() {
    let text = "abcabcabc".repeat(200);
    assert_eq!(round_trip(&text), text);
}

#[test]
fn test_round_trip_full_alphabet() {
    // Every symbol in the alphabet exactly once, plus skew so weights differ
    let mut text: String = (0u8..ALPHABET_SIZE as u8).map(|b| b as char).collect();
    text.push_str(&"e".repeat(50));
    text.push_str(&"t".repeat(30));

    assert_eq!(round_trip(&text), text);
}

#[test]
fn test_round_trip_single_symbol() {
    // Degenerate case: one distinct symbol, empty-string code
    let text = "qqqqqqqqqq";
    assert_eq!(round_trip(text), text);
}

#[test]
fn test_round_trip_single_character() {
    assert_eq!(round_trip("x"), "x");
}

#[test]
fn test_empty_input_fails_without_output() {
    let mut artifact = Vec::new();
    let result = compress("", &mut artifact);

    assert!(matches!(result, Err(Error::Codec(CodecError::EmptyInput))));
    assert!(artifact.is_empty(), "failed run must not produce output");
}

#[test]
fn test_non_ascii_input_fails_without_output() {
    let mut artifact = Vec::new();
    let result = compress("na\u{ef}ve", &mut artifact);

    assert!(matches!(
        result,
        Err(Error::Codec(CodecError::SymbolOutOfRange { .. }))
    ));
    assert!(artifact.is_empty());
}

#[test]
fn test_example_artifact_shape() {
    // Spec example: a:3 b:2 c:1 with the documented deterministic tie-break
    let mut artifact = Vec::new();
    compress("aaabbc", &mut artifact).unwrap();

    let text = String::from_utf8(artifact).unwrap();
    let (table_section, stream) = text.split_once("\n\n").expect("blank separator");

    assert!(table_section.starts_with("HUFTAB 1 3"));
    assert_eq!(stream, "0 0 0 11 11 10 ");
}

#[test]
fn test_token_count_matches_input_length() {
    let text = "mississippi";
    let mut artifact = Vec::new();
    compress(text, &mut artifact).unwrap();

    let rendered = String::from_utf8(artifact).unwrap();
    let (_, stream) = rendered.split_once("\n\n").unwrap();

    assert_eq!(stream.split_whitespace().count(), text.len());
}

#[test]
fn test_code_lengths_follow_frequency() {
    let freqs = FrequencyTable::from_text("aaaaaaab").unwrap();
    let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
    let table = assign_codes(&tree);

    // More frequent symbol never gets a longer code
    let a_len = table.code(b'a').unwrap().len();
    let b_len = table.code(b'b').unwrap().len();
    assert!(a_len <= b_len);
}

#[test]
fn test_decode_skips_stray_tokens() {
    let mut artifact = Vec::new();
    compress("aaabbc", &mut artifact).unwrap();

    // Append a token that matches no code; decode must skip it silently
    artifact.extend_from_slice(b"0110011 ");

    let text = decompress(&mut BufReader::new(&artifact[..])).unwrap();
    assert_eq!(text, "aaabbc");
}

#[test]
fn test_corrupted_table_rejected() {
    let artifact = b"HUFTAB 1 2\n97 0\n98 0\n\n0 0 ";
    let result = decompress(&mut BufReader::new(&artifact[..]));

    assert!(matches!(
        result,
        Err(Error::Table(TableError::DuplicateCode { .. }))
    ));
}

#[test]
fn test_truncated_artifact_rejected() {
    let mut artifact = Vec::new();
    compress("hello world", &mut artifact).unwrap();

    // Cut the artifact off inside the table section
    artifact.truncate(14);

    let result = decompress(&mut BufReader::new(&artifact[..]));
    assert!(result.is_err());
}

#[test]
fn test_identical_input_yields_identical_artifact() {
    let text = "deterministic output for deterministic input";

    let mut first = Vec::new();
    compress(text, &mut first).unwrap();
    let mut second = Vec::new();
    compress(text, &mut second).unwrap();

    assert_eq!(first, second);
}
