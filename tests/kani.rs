//! Kani proof harnesses
//!
//! This test module contains the Kani verification proofs for the heaps.
//! The proofs are organized in the tests/kani/ subdirectory.
//!
//! To run them:
//!   cargo kani --tests

#[cfg(kani)]
#[path = "kani/mod.rs"]
mod kani_module;
