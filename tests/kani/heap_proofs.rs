//! Bounded proofs of the `Heap` contract
//!
//! Each harness inserts a handful of symbolic values and checks the
//! observable contract: length accounting, the maximum at the root, and
//! non-increasing extraction.

#[cfg(kani)]
use linked_max_heap::array::ArrayMaxHeap;
#[cfg(kani)]
use linked_max_heap::linked::MaxHeap;
#[cfg(kani)]
use linked_max_heap::Heap;

/// Insert always increments the length and never lowers the maximum
#[cfg(kani)]
fn check_insert_increments_len<H: Heap<u8>>() {
    let mut heap = H::new();
    let first: u8 = kani::any();
    let second: u8 = kani::any();

    heap.insert(first);
    assert!(heap.len() == 1);
    heap.insert(second);
    assert!(heap.len() == 2);

    let max = if first >= second { first } else { second };
    assert!(heap.peek_max() == Some(&max));
}

/// Extraction from three values comes out in non-increasing order
#[cfg(kani)]
fn check_extract_order<H: Heap<u8>>() {
    let mut heap = H::new();
    for _ in 0..3 {
        heap.insert(kani::any());
    }

    let a = heap.extract_max();
    let b = heap.extract_max();
    let c = heap.extract_max();
    assert!(a.is_some() && b.is_some() && c.is_some());
    assert!(a >= b && b >= c);
    assert!(heap.extract_max().is_none());
    assert!(heap.is_empty());
}

/// Extraction from an empty heap returns None and changes nothing
#[cfg(kani)]
fn check_empty_extract<H: Heap<u8>>() {
    let mut heap = H::new();
    assert!(heap.extract_max().is_none());
    assert!(heap.peek_max().is_none());
    assert!(heap.len() == 0);
}

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len_linked() {
    check_insert_increments_len::<MaxHeap<u8>>();
}

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len_array() {
    check_insert_increments_len::<ArrayMaxHeap<u8>>();
}

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_order_linked() {
    check_extract_order::<MaxHeap<u8>>();
}

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_order_array() {
    check_extract_order::<ArrayMaxHeap<u8>>();
}

#[cfg(kani)]
#[kani::proof]
fn verify_empty_extract_linked() {
    check_empty_extract::<MaxHeap<u8>>();
}

#[cfg(kani)]
#[kani::proof]
fn verify_empty_extract_array() {
    check_empty_extract::<ArrayMaxHeap<u8>>();
}
