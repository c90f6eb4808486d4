//! Disjoint set with path compression but no balancing.
//!
//! Merges follow the same fixed rule as the naive variant (left root beneath
//! right root); lookups flatten every path they traverse, which brings the
//! amortised cost down to `O(log n)`.

use tracing::{debug, trace};

use crate::{DisjointSet, error::Result, forest::ParentForest};

/// Disjoint set whose lookups repoint traversed nodes at their root.
///
/// # Examples
/// ```
/// use dsu_core::{DisjointSet, PathCompressionDisjointSet};
///
/// let mut set = PathCompressionDisjointSet::new(4);
/// set.union(0, 1)?;
/// set.union(1, 2)?;
/// assert_eq!(set.find(0)?, 2);
/// assert_eq!(set.set_count(), 2);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathCompressionDisjointSet {
    forest: ParentForest,
}

impl PathCompressionDisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, variant = "path-compression", "constructed disjoint set");
        Self {
            forest: ParentForest::new(len),
        }
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &ParentForest {
        &self.forest
    }
}

impl DisjointSet for PathCompressionDisjointSet {
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
        let element = self.forest.check(element)?;
        Ok(self.forest.root_compressing(element))
    }

    fn union(&mut self, left: usize, right: usize) -> Result<()> {
        let left = self.forest.check(left)?;
        let right = self.forest.check(right)?;
        let left_root = self.forest.root_compressing(left);
        let right_root = self.forest.root_compressing(right);
        if left_root == right_root {
            return Ok(());
        }

        self.forest.link(left_root, right_root);
        trace!(child = left_root, parent = right_root, "merged sets");
        Ok(())
    }
}
