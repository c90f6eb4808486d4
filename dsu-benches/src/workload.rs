//! Seeded union workloads for comparing the disjoint-set variants.
//!
//! A [`UnionWorkload`] is a fixed sequence of merges over `0..element_count`.
//! Replaying it applies every merge in order and then sweeps `connected`
//! queries from each element to element `0`. Data is seeded so repeated runs
//! measure identical work.

use std::fmt;

use dsu_core::{DisjointSet, Result as DsuResult};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during workload generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkloadError {
    /// The requested element count was zero.
    #[error("element count must be greater than zero")]
    ZeroElements,
}

/// Shape of the merge sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkloadKind {
    /// `union(0, i)` for every `i` in order.
    ///
    /// Without balancing or compression each merge hangs the previous root
    /// under the next element, so lookups from `0` walk the whole chain.
    Chain,
    /// `element_count` merges between uniformly random pairs.
    Random,
}

impl WorkloadKind {
    /// Every workload kind, in benchmark order.
    pub const ALL: [Self; 2] = [Self::Chain, Self::Random];

    /// Stable label used in benchmark ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for workload generation.
#[derive(Clone, Copy, Debug)]
pub struct WorkloadConfig {
    /// Shape of the merge sequence.
    pub kind: WorkloadKind,
    /// Number of elements in the universe.
    pub element_count: usize,
    /// RNG seed for reproducibility; ignored by [`WorkloadKind::Chain`].
    pub seed: u64,
}

/// A pre-generated merge sequence.
///
/// # Examples
///
/// ```
/// use dsu_benches::workload::{UnionWorkload, WorkloadConfig, WorkloadKind};
/// use dsu_core::{AnyDisjointSet, DisjointSet, Variant};
///
/// let config = WorkloadConfig { kind: WorkloadKind::Chain, element_count: 8, seed: 0 };
/// let workload = UnionWorkload::generate(&config).expect("valid config");
/// let mut set = AnyDisjointSet::new(Variant::Naive, workload.element_count());
/// assert_eq!(workload.replay(&mut set).expect("ids in range"), 8);
/// assert_eq!(set.set_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct UnionWorkload {
    element_count: usize,
    unions: Vec<(usize, usize)>,
}

impl UnionWorkload {
    /// Generates the merge sequence eagerly from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadError::ZeroElements`] if `element_count` is zero.
    pub fn generate(config: &WorkloadConfig) -> Result<Self, WorkloadError> {
        let element_count = config.element_count;
        if element_count == 0 {
            return Err(WorkloadError::ZeroElements);
        }

        let unions = match config.kind {
            WorkloadKind::Chain => (1..element_count).map(|next| (0, next)).collect(),
            WorkloadKind::Random => {
                let mut rng = SmallRng::seed_from_u64(config.seed);
                (0..element_count)
                    .map(|_| {
                        (
                            rng.gen_range(0..element_count),
                            rng.gen_range(0..element_count),
                        )
                    })
                    .collect()
            }
        };

        Ok(Self {
            element_count,
            unions,
        })
    }

    /// Number of elements the workload addresses.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.element_count
    }

    /// The merge sequence in replay order.
    #[must_use]
    pub fn unions(&self) -> &[(usize, usize)] {
        &self.unions
    }

    /// Applies every merge to `set`, then queries each element against
    /// element `0`.
    ///
    /// Returns how many elements share a set with element `0`, itself
    /// included.
    ///
    /// # Errors
    ///
    /// Propagates [`dsu_core::DsuError::OutOfBounds`] when `set` holds fewer
    /// elements than the workload addresses.
    pub fn replay<D: DisjointSet>(&self, set: &mut D) -> DsuResult<usize> {
        for &(left, right) in &self.unions {
            set.union(left, right)?;
        }
        let mut joined = 0_usize;
        for element in 0..self.element_count {
            if set.connected(0, element)? {
                joined += 1;
            }
        }
        Ok(joined)
    }
}
