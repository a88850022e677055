//! Kani proof harnesses
//!
//! - `heap_proofs.rs`: bounded proofs of the `Heap` contract for both heaps
//! - `consistency_proofs.rs`: the linked and array heaps agree step for step

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "consistency_proofs.rs"]
mod consistency_proofs;
