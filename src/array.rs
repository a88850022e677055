//! Array-backed binary max-heap
//!
//! The same tree as [`MaxHeap`](crate::linked::MaxHeap), stored in level
//! order in a `Vec`: the children of index `i` are `2i + 1` and `2i + 2`.
//! Insertion and extraction follow the linked heap step for step (strict
//! sift-up, bigger-child descent with ties to the left, refill from the last
//! slot), so both heaps hold identical layers after any sequence of
//! operations.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_max` | O(log n)   |
//! | `peek_max`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use linked_max_heap::Heap;
//! use linked_max_heap::array::ArrayMaxHeap;
//!
//! let mut heap = ArrayMaxHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek_max(), Some(&3));
//! assert_eq!(heap.extract_max(), Some(3));
//! assert_eq!(heap.extract_max(), Some(2));
//! assert_eq!(heap.extract_max(), Some(1));
//! assert_eq!(heap.extract_max(), None);
//! ```

use crate::traits::{Heap, InvariantViolation};

/// A binary max-heap stored as a vector in level order
#[derive(Debug, Clone)]
pub struct ArrayMaxHeap<T> {
    /// Heap values, root first
    data: Vec<T>,
}

impl<T: Ord> Heap<T> for ArrayMaxHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    fn extract_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let leaf = self.sift_down_to_leaf(0);
        let last_idx = self.data.len() - 1;
        if leaf == last_idx {
            return self.data.pop();
        }

        self.data.swap(leaf, last_idx);
        let max = self.data.pop();
        self.sift_up(leaf);
        max
    }

    fn layers(&self) -> Vec<Vec<&T>> {
        let mut layers = Vec::new();
        let mut start = 0;
        let mut width = 1;
        while start < self.data.len() {
            let end = (start + width).min(self.data.len());
            layers.push(self.data[start..end].iter().collect());
            start = end;
            width *= 2;
        }
        layers
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        for index in 1..self.data.len() {
            if self.data[index] > self.data[(index - 1) / 2] {
                return Err(InvariantViolation::HeapOrder { position: index + 1 });
            }
        }
        Ok(())
    }
}

impl<T: Ord> ArrayMaxHeap<T> {
    /// Creates an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Removes every value from the heap
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns its values in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.extract_max() {
            sorted.push(value);
        }
        sorted.reverse();
        sorted
    }

    /// Move element at index up while it is strictly greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down along the bigger child until it is a leaf
    fn sift_down_to_leaf(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                return index;
            }

            let bigger = if right < len && self.data[right] > self.data[left] {
                right
            } else {
                left
            };
            self.data.swap(index, bigger);
            index = bigger;
        }
    }
}

impl<T: Ord> Default for ArrayMaxHeap<T> {
    fn default() -> Self {
        <Self as Heap<T>>::new()
    }
}

impl<T: Ord> Extend<T> for ArrayMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArrayMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}
