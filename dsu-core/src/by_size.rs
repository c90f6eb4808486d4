//! Union by size with path compression.
//!
//! Each root records how many elements its tree holds. A merge hangs the
//! smaller tree beneath the larger one, and on equal sizes the left root goes
//! beneath the right root. The tie rule is fixed so that every implementation
//! replaying the same merges arrives at the same roots.

use tracing::{debug, trace};

use crate::{DisjointSet, error::Result, forest::ParentForest};

/// Disjoint set balanced by tree size.
///
/// # Examples
/// ```
/// use dsu_core::{DisjointSet, SizeDisjointSet};
///
/// let mut set = SizeDisjointSet::new(5);
/// set.union(0, 1)?;
/// set.union(2, 1)?;
/// assert_eq!(set.set_size(2)?, 3);
/// assert_eq!(set.set_size(4)?, 1);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SizeDisjointSet {
    forest: ParentForest,
    /// Element count of the tree rooted at each index; stale for non-roots.
    size: Vec<usize>,
}

impl SizeDisjointSet {
    /// Creates `len` singleton sets of size one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, variant = "by-size", "constructed disjoint set");
        Self {
            forest: ParentForest::new(len),
            size: vec![1; len],
        }
    }

    /// Number of elements in the set containing `element`.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when `element` is outside the
    /// universe.
    pub fn set_size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &ParentForest {
        &self.forest
    }
}

impl DisjointSet for SizeDisjointSet {
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

        let (child, parent) = if self.size[left_root] > self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.forest.link(child, parent);
        self.size[parent] += self.size[child];
        trace!(child, parent, size = self.size[parent], "merged sets");
        Ok(())
    }
}
