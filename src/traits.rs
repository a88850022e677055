//! Common traits for max-heap data structures
//!
//! This module provides the [`Heap`] trait shared by the linked-node
//! [`MaxHeap`](crate::linked::MaxHeap) and the array-backed
//! [`ArrayMaxHeap`](crate::array::ArrayMaxHeap), together with the
//! [`InvariantViolation`] error reported by [`Heap::validate`].
//!
//! Both implementations follow the same algorithms, so for an identical
//! sequence of operations they hold identical trees. The integration tests
//! rely on that to compare them against each other.

use thiserror::Error;

/// A broken structural invariant, as reported by [`Heap::validate`]
///
/// Positions are 1-based level-order indices: the root is position 1 and the
/// children of position `p` are `2p` and `2p + 1`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child holds a greater value than its parent
    #[error("node at position {position} is greater than its parent")]
    HeapOrder {
        /// Position of the offending child
        position: usize,
    },
    /// A child's parent link does not point back to the node holding it
    #[error("node at position {position} has an inconsistent parent link")]
    ParentLink {
        /// Position of the node with the bad back-reference
        position: usize,
    },
    /// The tree is not left-complete
    #[error("tree is not left-complete at position {position}")]
    Shape {
        /// First position found out of level order
        position: usize,
    },
    /// The tracked length disagrees with the number of reachable nodes
    #[error("heap tracks {tracked} nodes but {reachable} are reachable from the root")]
    LengthMismatch {
        /// Length the heap reports
        tracked: usize,
        /// Nodes actually reachable from the root
        reachable: usize,
    },
}

/// Base trait for max-heap / priority queue data structures
///
/// The API mirrors `std::collections::BinaryHeap` under the names used by the
/// command protocol:
/// - `insert` adds a value
/// - `extract_max` removes and returns the maximum
/// - `peek_max` returns the maximum without removing it
///
/// # Example
///
/// ```rust
/// use linked_max_heap::Heap;
/// use linked_max_heap::linked::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// heap.insert(3);
/// heap.insert(7);
/// heap.insert(5);
///
/// assert_eq!(heap.peek_max(), Some(&7));
/// assert_eq!(heap.extract_max(), Some(7));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// The new node is attached at the first free slot in breadth-first,
    /// left-to-right order and then sifted up while it is strictly greater
    /// than its parent.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the maximum value without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the maximum value
    ///
    /// Returns `None` and leaves the heap untouched when it is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_max(&mut self) -> Option<T>;

    /// Returns the values of each breadth-first layer, root layer first
    fn layers(&self) -> Vec<Vec<&T>>;

    /// Returns the number of layers in the tree (0 for an empty heap)
    fn height(&self) -> usize {
        self.layers().len()
    }

    /// Checks every structural invariant, reporting the first one broken
    ///
    /// This walks the whole tree and is intended for tests and diagnostics.
    fn validate(&self) -> Result<(), InvariantViolation>;
}

/// Returns the height of a left-complete tree holding `len` nodes
///
/// This is `ceil(log2(len + 1))`, the bound every heap in this crate keeps.
pub fn complete_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}
