//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing or replaying a
//! workload so that setup functions can propagate failures with `?`.

use crate::workload::WorkloadError;
use dsu_core::DsuError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Workload generation failed.
    #[error("workload generation failed: {0}")]
    Workload(#[from] WorkloadError),
    /// A disjoint set rejected a workload operation.
    #[error("disjoint set operation failed: {0}")]
    Dsu(#[from] DsuError),
    /// Variants disagreed on the partition produced by the same workload.
    #[error("variant {variant} reported {found} sets where {expected} were expected")]
    Diverged {
        /// Label of the disagreeing variant.
        variant: &'static str,
        /// Set count reported by the reference variant.
        expected: usize,
        /// Set count reported by `variant`.
        found: usize,
    },
}
