//! The interface shared by every disjoint-set variant.

use std::collections::HashMap;

use crate::error::Result;

/// A partition of the fixed universe `0..len` into disjoint sets.
///
/// Every operation taking an element id fails with
/// [`crate::DsuError::OutOfBounds`] when the id is not below [`Self::len`];
/// the structure is never clamped or grown.
///
/// [`Self::find`] takes `&mut self` because the compressing variants rewrite
/// parent pointers while answering it. Share a structure across threads
/// through [`crate::SharedDisjointSet`].
pub trait DisjointSet {
    /// Creates a structure where each of the `len` elements is its own set.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Returns `true` when the universe holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets currently in the partition.
    fn set_count(&self) -> usize;

    /// Returns the root representing the set that contains `element`.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when `element` is outside the
    /// universe.
    fn find(&mut self, element: usize) -> Result<usize>;

    /// Merges the sets containing `left` and `right`.
    ///
    /// A no-op when both already share a set. Both ids are validated before
    /// the structure is touched.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when either id is outside the
    /// universe.
    fn union(&mut self, left: usize, right: usize) -> Result<()>;

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`crate::DsuError::OutOfBounds`] when either id is outside the
    /// universe.
    fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        Ok(left_root == right_root)
    }

    /// Lists the sets of the partition.
    ///
    /// Each set is sorted ascending and the sets are ordered by their smallest
    /// member, so two structures holding the same partition return equal
    /// values regardless of which roots they chose.
    fn components(&mut self) -> Vec<Vec<usize>> {
        let mut slot_by_root: HashMap<usize, usize> = HashMap::with_capacity(self.set_count());
        let mut components: Vec<Vec<usize>> = Vec::with_capacity(self.set_count());

        for element in 0..self.len() {
            // Every id below `len` is in range.
            let Ok(root) = self.find(element) else {
                continue;
            };
            let slot = *slot_by_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            if let Some(component) = components.get_mut(slot) {
                component.push(element);
            }
        }

        components
    }
}
