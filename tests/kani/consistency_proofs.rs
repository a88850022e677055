//! The linked and array heaps run the same algorithms, so a symbolic
//! sequence of operations must produce the same results on both.

#[cfg(kani)]
use linked_max_heap::array::ArrayMaxHeap;
#[cfg(kani)]
use linked_max_heap::linked::MaxHeap;
#[cfg(kani)]
use linked_max_heap::Heap;

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heaps_consistent() {
    let mut linked: MaxHeap<u8> = MaxHeap::new();
    let mut array: ArrayMaxHeap<u8> = ArrayMaxHeap::new();

    for _ in 0..5 {
        if kani::any::<bool>() {
            let value: u8 = kani::any();
            linked.insert(value);
            array.insert(value);
        } else {
            assert!(linked.extract_max() == array.extract_max());
        }

        assert!(linked.len() == array.len());
        assert!(linked.peek_max() == array.peek_max());
        assert!(linked.validate().is_ok());
    }
}
