//! Stress tests with large numbers of operations
//!
//! These tests perform many operations in various patterns to catch edge
//! cases and verify correctness under load.

use linked_max_heap::array::ArrayMaxHeap;
use linked_max_heap::linked::MaxHeap;
use linked_max_heap::traits::complete_height;
use linked_max_heap::Heap;

/// Test massive numbers of inserts and extracts
fn test_massive_operations<H: Heap<i64>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.insert(i);
    }

    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.height(), complete_height(10_000));

    for i in (0..10_000).rev() {
        assert_eq!(heap.extract_max(), Some(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating insert and extract
fn test_alternating_ops<H: Heap<i64>>() {
    let mut heap = H::new();

    for i in 0..2000 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert_eq!(heap.extract_max(), Some(i * 2 + 1));
    }

    assert_eq!(heap.len(), 2000);
    assert_eq!(heap.validate(), Ok(()));

    let mut last = i64::MAX;
    while let Some(value) = heap.extract_max() {
        assert!(value <= last);
        last = value;
    }
}

/// Test growth and shrinkage in waves, checking the shape each time
fn test_waves<H: Heap<i64>>() {
    let mut heap = H::new();
    let mut seed: i64 = 12345;

    for wave in 0..20 {
        for _ in 0..(300 + wave * 17) {
            // Linear congruential generator, deterministic across runs
            seed = (seed * 1_103_515_245 + 12_345) % 2_147_483_648;
            heap.insert(seed % 1000);
        }
        assert_eq!(heap.validate(), Ok(()));

        for _ in 0..(250 + wave * 13) {
            assert!(heap.extract_max().is_some());
        }
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.height(), complete_height(heap.len()));
    }
}

/// Test many equal values
fn test_all_equal<H: Heap<i64>>() {
    let mut heap = H::new();

    for _ in 0..5000 {
        heap.insert(42);
    }
    for _ in 0..5000 {
        assert_eq!(heap.extract_max(), Some(42));
    }
    assert_eq!(heap.extract_max(), None);
}

#[test]
fn test_linked_massive() {
    test_massive_operations::<MaxHeap<i64>>();
}

#[test]
fn test_linked_alternating() {
    test_alternating_ops::<MaxHeap<i64>>();
}

#[test]
fn test_linked_waves() {
    test_waves::<MaxHeap<i64>>();
}

#[test]
fn test_linked_all_equal() {
    test_all_equal::<MaxHeap<i64>>();
}

#[test]
fn test_array_massive() {
    test_massive_operations::<ArrayMaxHeap<i64>>();
}

#[test]
fn test_array_alternating() {
    test_alternating_ops::<ArrayMaxHeap<i64>>();
}

#[test]
fn test_array_waves() {
    test_waves::<ArrayMaxHeap<i64>>();
}

#[test]
fn test_array_all_equal() {
    test_all_equal::<ArrayMaxHeap<i64>>();
}
