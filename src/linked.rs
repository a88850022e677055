//! Linked-node binary max-heap
//!
//! The heap is a left-complete binary tree built from explicitly linked
//! nodes. Every node knows its parent and its two children, so sift-up walks
//! parent links and sift-down walks child links without any index arithmetic
//! on the values themselves.
//!
//! # Storage
//!
//! Nodes live in a [`slotmap::SlotMap`] arena. Child slots and the parent
//! back-reference are plain arena keys: the arena owns every node, a key
//! never keeps a node alive, and there are no reference cycles to break on
//! drop. Only values are ever handed out, never keys.
//!
//! # Slot location
//!
//! The tree is always left-complete, so the node at 1-based level-order
//! position `p` is found by walking from the root along the binary digits of
//! `p` below its leading one (`0` = left, `1` = right). Insertion attaches at
//! position `len + 1`, which is exactly the first free slot a breadth-first,
//! left-to-right scan would find.
//!
//! # Extraction
//!
//! `extract_max` pushes the root value down along the bigger child until it
//! reaches a leaf. If that leaf is the structurally last node it is simply
//! detached. Otherwise the last node is detached instead and its value
//! refills the leaf, which is then sifted up. Either way the tree stays
//! left-complete.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_max` | O(log n)   |
//! | `peek_max`    | O(1)       |
//! | `layers`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use linked_max_heap::Heap;
//! use linked_max_heap::linked::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.insert(200);
//! heap.insert(10);
//! assert_eq!(heap.extract_max(), Some(200));
//!
//! heap.insert(5);
//! heap.insert(500);
//! assert_eq!(heap.extract_max(), Some(500));
//! assert_eq!(heap.extract_max(), Some(10));
//! assert_eq!(heap.extract_max(), Some(5));
//! assert_eq!(heap.extract_max(), None);
//! ```

use std::fmt;
use std::mem;

use slotmap::{new_key_type, SlotMap};

use crate::traits::{Heap, InvariantViolation};

new_key_type! {
    /// Arena key identifying one node of a [`MaxHeap`]
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeKey>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl<T> Node<T> {
    fn leaf(value: T, parent: Option<NodeKey>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A binary max-heap made of linked nodes
///
/// Values are kept in heap order (every node is `>=` its children) on a
/// left-complete tree, so the root always holds the maximum and the height
/// never exceeds `ceil(log2(n + 1))`.
#[derive(Clone)]
pub struct MaxHeap<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
}

impl<T: Ord> Heap<T> for MaxHeap<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, value: T) {
        let position = self.len() + 1;
        if self.root.is_none() {
            self.root = Some(self.nodes.insert(Node::leaf(value, None)));
            return;
        }

        let parent = self.locate(position / 2);
        let key = self.nodes.insert(Node::leaf(value, Some(parent)));
        let slots = &mut self.nodes[parent];
        if position % 2 == 0 {
            debug_assert!(slots.left.is_none());
            slots.left = Some(key);
        } else {
            debug_assert!(slots.left.is_some() && slots.right.is_none());
            slots.right = Some(key);
        }

        self.sift_up(key);
    }

    fn peek_max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }

    fn extract_max(&mut self) -> Option<T> {
        let root = self.root?;
        let leaf = self.sift_down_to_leaf(root);
        let last = self.locate(self.len());

        if leaf == last {
            return Some(self.detach(leaf));
        }

        // The leaf now holds the old maximum; refill it from the last node.
        let refill = self.detach(last);
        let max = mem::replace(&mut self.nodes[leaf].value, refill);
        self.sift_up(leaf);
        Some(max)
    }

    fn layers(&self) -> Vec<Vec<&T>> {
        let mut layers = Vec::new();
        let mut layer: Vec<NodeKey> = self.root.into_iter().collect();
        while !layer.is_empty() {
            layers.push(layer.iter().map(|&key| &self.nodes[key].value).collect());
            layer = self.next_layer(&layer);
        }
        layers
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        let mut visited = 0;
        let mut layer: Vec<(NodeKey, usize)> = Vec::new();

        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(InvariantViolation::ParentLink { position: 1 });
            }
            layer.push((root, 1));
        }

        while !layer.is_empty() {
            let mut next = Vec::with_capacity(layer.len() * 2);
            for &(key, position) in &layer {
                visited += 1;
                if position != visited {
                    return Err(InvariantViolation::Shape { position });
                }
                if visited > self.nodes.len() {
                    return Err(InvariantViolation::LengthMismatch {
                        tracked: self.nodes.len(),
                        reachable: visited,
                    });
                }

                let node = &self.nodes[key];
                let children = [(node.left, 2 * position), (node.right, 2 * position + 1)];
                for (child, child_position) in children {
                    let Some(child) = child else { continue };
                    let child_node = self
                        .nodes
                        .get(child)
                        .ok_or(InvariantViolation::ParentLink {
                            position: child_position,
                        })?;
                    if child_node.parent != Some(key) {
                        return Err(InvariantViolation::ParentLink {
                            position: child_position,
                        });
                    }
                    if child_node.value > node.value {
                        return Err(InvariantViolation::HeapOrder {
                            position: child_position,
                        });
                    }
                    next.push((child, child_position));
                }
            }
            layer = next;
        }

        if visited != self.nodes.len() {
            return Err(InvariantViolation::LengthMismatch {
                tracked: self.nodes.len(),
                reachable: visited,
            });
        }
        Ok(())
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Removes every value from the heap
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Consumes the heap and returns its values in ascending order
    ///
    /// Matches `std::collections::BinaryHeap::into_sorted_vec`.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.extract_max() {
            sorted.push(value);
        }
        sorted.reverse();
        sorted
    }

    /// Returns the node at a 1-based level-order position
    ///
    /// Panics if the position is not occupied; callers only ask for
    /// positions in `1..=len`.
    fn locate(&self, position: usize) -> NodeKey {
        debug_assert!(position >= 1 && position <= self.len());
        let mut current = match self.root {
            Some(root) => root,
            None => panic!("heap corrupted: no root while locating position {position}"),
        };

        let depth = usize::BITS - 1 - position.leading_zeros();
        for shift in (0..depth).rev() {
            let node = &self.nodes[current];
            let child = if (position >> shift) & 1 == 0 {
                node.left
            } else {
                node.right
            };
            current = match child {
                Some(child) => child,
                None => panic!("heap corrupted: position {position} is not occupied"),
            };
        }
        current
    }

    /// Moves the value at `key` up while it is strictly greater than its parent
    fn sift_up(&mut self, key: NodeKey) {
        let mut current = key;
        while let Some(parent) = self.nodes[current].parent {
            if self.nodes[current].value <= self.nodes[parent].value {
                break;
            }
            self.swap_values(current, parent);
            current = parent;
        }
    }

    /// Pushes the value at `key` down along the bigger child until it sits
    /// in a leaf, returning that leaf. Ties go to the left child.
    fn sift_down_to_leaf(&mut self, key: NodeKey) -> NodeKey {
        let mut current = key;
        loop {
            let node = &self.nodes[current];
            let bigger = match (node.left, node.right) {
                (None, None) => return current,
                (Some(child), None) | (None, Some(child)) => child,
                (Some(left), Some(right)) => {
                    if self.nodes[left].value >= self.nodes[right].value {
                        left
                    } else {
                        right
                    }
                }
            };
            self.swap_values(current, bigger);
            current = bigger;
        }
    }

    /// Unlinks a leaf from its parent (or the root slot) and frees it
    fn detach(&mut self, key: NodeKey) -> T {
        let node = match self.nodes.remove(key) {
            Some(node) => node,
            None => panic!("heap corrupted: detaching a node that is not in the arena"),
        };
        debug_assert!(node.is_leaf());

        match node.parent {
            None => self.root = None,
            Some(parent) => {
                let slots = &mut self.nodes[parent];
                if slots.left == Some(key) {
                    slots.left = None;
                } else if slots.right == Some(key) {
                    slots.right = None;
                } else {
                    panic!("heap corrupted: leaf is not linked from its parent");
                }
            }
        }
        node.value
    }

    fn swap_values(&mut self, a: NodeKey, b: NodeKey) {
        match self.nodes.get_disjoint_mut([a, b]) {
            Some([a, b]) => mem::swap(&mut a.value, &mut b.value),
            None => panic!("heap corrupted: swapping values of invalid or identical nodes"),
        }
    }

    fn next_layer(&self, layer: &[NodeKey]) -> Vec<NodeKey> {
        let mut next = Vec::with_capacity(layer.len() * 2);
        for &key in layer {
            let node = &self.nodes[key];
            next.extend(node.left);
            next.extend(node.right);
        }
        next
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        <Self as Heap<T>>::new()
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("len", &self.len())
            .field("layers", &self.layers())
            .finish()
    }
}
