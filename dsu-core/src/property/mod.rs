//! Property-based tests for the disjoint-set variants.
//!
//! Replays generated union sequences against a relabelling oracle to check the
//! equivalence-relation laws and set-count bookkeeping, compares all four
//! variants against each other, and verifies the balancing invariants of the
//! size and rank variants together with path compression itself.

mod balancing;
mod laws;
mod strategies;
