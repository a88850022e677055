//! Breadth-first rendering of a heap, one layer per line
//!
//! Diagnostics only: nothing in the heaps depends on it.
//!
//! ```rust
//! use linked_max_heap::{Heap, LayeredPrinter};
//! use linked_max_heap::linked::MaxHeap;
//!
//! let heap: MaxHeap<i32> = [200, 10, 5, 500].into_iter().collect();
//! assert_eq!(LayeredPrinter::new(&heap).to_string(), "500\n200 5\n10\n");
//! ```

use std::fmt;

use crate::traits::Heap;

/// Formats the layers of a heap, root layer first
///
/// Each layer is written on its own line with values separated by a single
/// space. An empty heap renders as the empty string.
pub struct LayeredPrinter<'a, T> {
    layers: Vec<Vec<&'a T>>,
}

impl<'a, T: Ord> LayeredPrinter<'a, T> {
    /// Captures the current layers of `heap`
    pub fn new<H: Heap<T>>(heap: &'a H) -> Self {
        Self {
            layers: heap.layers(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for LayeredPrinter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in &self.layers {
            let mut values = layer.iter();
            if let Some(first) = values.next() {
                write!(f, "{first}")?;
            }
            for value in values {
                write!(f, " {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
