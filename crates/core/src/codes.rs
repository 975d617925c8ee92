//! Code assignment by tree traversal.
//!
//! Walks a finished Huffman tree and records each leaf's root-to-leaf path
//! as its code: '0' for a left edge, '1' for a right edge. The traversal is
//! a pure function carrying the accumulated path as a parameter; nothing on
//! the tree is mutated.

use crate::table::SymbolTable;
use crate::tree::{HuffmanTree, Node};
use std::collections::BTreeMap;

/// Assign a binary code to every leaf of `tree`.
///
/// A tree that is a single leaf (single-symbol input, no merges) yields
/// the empty-string code; callers must treat that degenerate code as valid
/// for the decode round trip.
pub fn assign_codes(tree: &HuffmanTree) -> SymbolTable {
    let mut codes = BTreeMap::new();
    walk(tree.root(), String::new(), &mut codes);
    SymbolTable::from_codes(codes)
}

fn walk(node: &Node, path: String, codes: &mut BTreeMap<u8, String>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path);
        }
        Node::Internal { left, right, .. } => {
            walk(left, format!("{path}0"), codes);
            walk(right, format!("{path}1"), codes);
        }
    }
}
