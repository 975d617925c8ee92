//! Huffman tree model and construction.
//!
//! A tree node is either a leaf carrying a symbol or an internal node
//! owning exactly two children, with its weight equal to the sum of the
//! children's weights. Construction repeatedly merges the two lowest-weight
//! trees via the min-heap until a single tree remains.
//!
//! # Tie-break
//!
//! Equal-weight trees order by insertion sequence number: leaves enter the
//! queue in ascending symbol order, so equal-frequency symbols merge
//! lowest-symbol-first and the resulting code assignment is fully
//! deterministic for a given input.

use crate::error::{CodecError, Result};
use crate::freq::FrequencyTable;
use crate::heap::MinHeap;
use std::cmp::Ordering;

/// One node of a Huffman tree.
///
/// Internal nodes exclusively own their children; the tree is strictly
/// binary (no node has a single child), which is what makes leaf paths
/// prefix-free.
#[derive(Debug, Clone)]
pub enum Node {
    /// Terminal node carrying a symbol and its occurrence count.
    Leaf { symbol: u8, weight: u64 },
    /// Merge of two subtrees; weight is the sum of both children.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Cumulative weight of the subtree rooted at this node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// A Huffman tree: a single root node covering every encoded symbol.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Create a tree containing a single leaf.
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            root: Node::Leaf { symbol, weight },
        }
    }

    /// Merge two trees under a new internal root.
    ///
    /// The first argument becomes the left child (code bit '0'), the
    /// second the right child (code bit '1').
    pub fn merge(left: HuffmanTree, right: HuffmanTree) -> Self {
        let weight = left.weight() + right.weight();
        Self {
            root: Node::Internal {
                weight,
                left: Box::new(left.root),
                right: Box::new(right.root),
            },
        }
    }

    /// Cumulative weight of the whole tree.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Borrow the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Build the optimal tree for a frequency table.
    ///
    /// Inserts one leaf tree per non-zero symbol, then merges the two
    /// lowest-weight trees until one remains. A single-symbol input yields
    /// that sole leaf directly, with no internal node above it.
    ///
    /// # Errors
    /// Returns `CodecError::EmptyInput` when no symbol has a non-zero
    /// count; downstream stages require a valid tree.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self> {
        let mut heap = MinHeap::new();
        let mut seq = 0u64;

        for (symbol, weight) in freqs.non_zero() {
            heap.insert(QueuedTree {
                weight,
                seq,
                tree: HuffmanTree::leaf(symbol, weight),
            });
            seq += 1;
        }

        if heap.is_empty() {
            return Err(CodecError::EmptyInput.into());
        }

        while heap.len() > 1 {
            let first = heap.remove_top()?;
            let second = heap.remove_top()?;
            let merged = HuffmanTree::merge(first.tree, second.tree);
            heap.insert(QueuedTree {
                weight: merged.weight(),
                seq,
                tree: merged,
            });
            seq += 1;
        }

        Ok(heap.remove_top()?.tree)
    }
}

/// Heap entry pairing a tree with its insertion sequence number.
///
/// Ordering is `(weight, seq)`; `seq` is unique within one build, so the
/// ordering is total and consistent with equality.
struct QueuedTree {
    weight: u64,
    seq: u64,
    tree: HuffmanTree,
}

impl PartialEq for QueuedTree {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueuedTree {}

impl PartialOrd for QueuedTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedTree {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}
