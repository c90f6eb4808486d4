//! Benchmark parameter types.

use std::fmt;

use crate::workload::WorkloadKind;

/// Parameters for a single variant comparison run.
#[derive(Clone, Copy, Debug)]
pub struct VariantBenchParams {
    /// Shape of the union sequence.
    pub kind: WorkloadKind,
    /// Number of elements in the universe.
    pub element_count: usize,
}

impl fmt::Display for VariantBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.kind, self.element_count)
    }
}
