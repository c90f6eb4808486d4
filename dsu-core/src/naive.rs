//! Baseline disjoint set with neither path compression nor balancing.
//!
//! Every merge hangs the left root beneath the right root, so a sequence such
//! as `union(0, 1), union(1, 2), ...` builds a linear chain and `find` costs
//! `O(n)` in the worst case. Kept as the reference point the optimised
//! variants are measured against.

use tracing::{debug, trace};

use crate::{DisjointSet, error::Result, forest::ParentForest};

/// Disjoint set that never rewrites parent pointers during lookups.
///
/// # Examples
/// ```
/// use dsu_core::{DisjointSet, NaiveDisjointSet};
///
/// let mut set = NaiveDisjointSet::new(3);
/// set.union(0, 1)?;
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(0, 2)?);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub struct NaiveDisjointSet {
    forest: ParentForest,
}

impl NaiveDisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, variant = "naive", "constructed disjoint set");
        Self {
            forest: ParentForest::new(len),
        }
    }

    /// Resolves the root of `element` through a shared reference.
    ///
    /// Only this variant can answer lookups without mutation.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when `element` is outside the
    /// universe.
    pub fn root_of(&self, element: usize) -> Result<usize> {
        let element = self.forest.check(element)?;
        Ok(self.forest.root(element))
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &ParentForest {
        &self.forest
    }
}

impl DisjointSet for NaiveDisjointSet {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.forest.len()
    }

    fn set_count(&self) -> usize {
        self.forest.set_count()
    }

    fn find(&mut self, element: usize) -> Result<usize> {
        self.root_of(element)
    }

    fn union(&mut self, left: usize, right: usize) -> Result<()> {
        let left = self.forest.check(left)?;
        let right = self.forest.check(right)?;
        let left_root = self.forest.root(left);
        let right_root = self.forest.root(right);
        if left_root == right_root {
            return Ok(());
        }

        self.forest.link(left_root, right_root);
        trace!(child = left_root, parent = right_root, "merged sets");
        Ok(())
    }
}
