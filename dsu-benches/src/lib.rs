//! Benchmark support crate for the disjoint-set variants.
//!
//! Provides seeded union workloads and parameter types used by the Criterion
//! benchmarks that compare the four variants.

pub mod error;
pub mod params;
pub mod workload;
