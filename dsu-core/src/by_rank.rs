//! Union by rank with path compression.
//!
//! A root's rank bounds the height of its tree. Merging roots of different
//! rank hangs the lower-ranked root beneath the higher one and leaves both
//! ranks alone; only a tie raises the surviving root's rank, so a rank of `r`
//! implies at least `2^r` members and no rank exceeds `log2(n)`. Combined with
//! path compression this yields the inverse-Ackermann amortised bound.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{DisjointSet, error::Result, forest::ParentForest};

/// Disjoint set balanced by rank.
///
/// # Examples
/// ```
/// use dsu_core::{DisjointSet, RankDisjointSet};
///
/// let mut set = RankDisjointSet::new(4);
/// set.union(0, 1)?;
/// set.union(2, 3)?;
/// set.union(0, 2)?;
/// assert_eq!(set.rank_of(3)?, 2);
/// assert_eq!(set.set_count(), 1);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RankDisjointSet {
    forest: ParentForest,
    /// Height bound of the tree rooted at each index; stale for non-roots.
    rank: Vec<u8>,
}

impl RankDisjointSet {
    /// Creates `len` singleton sets of rank zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug!(len, variant = "by-rank", "constructed disjoint set");
        Self {
            forest: ParentForest::new(len),
            rank: vec![0; len],
        }
    }

    /// Rank of the root of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when `element` is outside the
    /// universe.
    pub fn rank_of(&mut self, element: usize) -> Result<u8> {
        let root = self.find(element)?;
        Ok(self.rank[root])
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &ParentForest {
        &self.forest
    }
}

impl DisjointSet for RankDisjointSet {
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

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (child, parent) = match left_rank.cmp(&right_rank) {
            Ordering::Less => (left_root, right_root),
            Ordering::Greater => (right_root, left_root),
            Ordering::Equal => {
                self.rank[left_root] = left_rank.saturating_add(1);
                (right_root, left_root)
            }
        };

        self.forest.link(child, parent);
        trace!(child, parent, rank = self.rank[parent], "merged sets");
        Ok(())
    }
}
