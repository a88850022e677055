//! Linked-Node Binary Max-Heap
//!
//! This crate provides a binary max-heap (priority queue) built as a
//! left-complete binary tree of explicitly linked nodes, plus a small command
//! interpreter that drives it from a token stream.
//!
//! # Features
//!
//! - **MaxHeap**: linked nodes in a slot-map arena; O(log n) insert and extract-max, O(1) peek
//! - **ArrayMaxHeap**: the same algorithms over a level-order `Vec`
//! - **LayeredPrinter**: breadth-first, one-layer-per-line rendering for diagnostics
//! - **command**: the `Insert <value>` / `ExtractMax` protocol used by the `max-heap` binary
//!
//! # Example
//!
//! ```rust
//! use linked_max_heap::linked::MaxHeap;
//! use linked_max_heap::Heap;
//!
//! let mut heap = MaxHeap::new();
//! heap.insert(200);
//! heap.insert(10);
//! heap.insert(5);
//! heap.insert(500);
//! assert_eq!(heap.peek_max(), Some(&500));
//! assert_eq!(heap.extract_max(), Some(500));
//! assert_eq!(heap.extract_max(), Some(200));
//! ```

pub mod array;
pub mod command;
pub mod layers;
pub mod linked;
pub mod traits;

// Re-export the main types for convenience
pub use array::ArrayMaxHeap;
pub use layers::LayeredPrinter;
pub use linked::MaxHeap;
pub use traits::{Heap, InvariantViolation};
