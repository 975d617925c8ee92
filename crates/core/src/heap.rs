//! Array-backed binary min-heap.
//!
//! The tree builder needs the two lowest-weight trees retrievable first,
//! so this is a priority queue ordered by `Ord` with the minimum at the
//! root. The heap is purely comparison-driven and element-agnostic; the
//! tree builder is its only in-crate user, but nothing here knows about
//! trees or weights.
//!
//! # Layout
//!
//! Standard array representation: the parent of index `i` is `(i - 1) / 2`,
//! its children are `2i + 1` and `2i + 2`. Insertion sifts the new element
//! up while it orders before its parent; removal replaces the root with the
//! last element and sifts it down toward the smaller child.

use crate::error::{CodecError, Result};

/// Min-heap priority queue over any ordered element type.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Current element count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the minimum element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert an element, restoring the heap shape invariant.
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum element.
    ///
    /// # Errors
    /// Returns `CodecError::QueueUnderflow` on an empty heap rather than
    /// a sentinel value.
    pub fn remove_top(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(CodecError::QueueUnderflow.into());
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = match self.items.pop() {
            Some(value) => value,
            None => return Err(CodecError::QueueUnderflow.into()),
        };

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Ok(top)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Prefer the smaller child
            let mut smallest = left;
            if right < len && self.items[right] < self.items[left] {
                smallest = right;
            }

            if self.items[smallest] < self.items[index] {
                self.items.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Check the heap shape invariant: every parent orders at or before
    /// both of its children.
    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[(i - 1) / 2] <= self.items[i])
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
