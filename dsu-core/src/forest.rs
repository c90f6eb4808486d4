//! Parent-pointer forest shared by every disjoint-set variant.
//!
//! The forest owns the parent mapping and the running set count. Variants
//! layer their own balancing data (sizes, ranks) on top and decide which root
//! is attached beneath which; the forest only knows how to walk, compress and
//! link.

use crate::error::{DsuError, Result};

#[derive(Clone, Debug)]
pub(crate) struct ParentForest {
    parent: Vec<usize>,
    sets: usize,
}

impl ParentForest {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            sets: len,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    pub(crate) fn set_count(&self) -> usize {
        self.sets
    }

    /// Validates that `element` lies inside the universe.
    pub(crate) fn check(&self, element: usize) -> Result<usize> {
        if element < self.parent.len() {
            Ok(element)
        } else {
            Err(DsuError::OutOfBounds {
                element,
                len: self.parent.len(),
            })
        }
    }

    /// Follows parent pointers to the root without rewriting anything.
    ///
    /// `element` must already have passed [`Self::check`].
    pub(crate) fn root(&self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Finds the root of `element` and repoints every node on the traversed
    /// path directly at it.
    ///
    /// Two passes: the first walks to the root, the second rewrites the path.
    /// Neither recurses, so arbitrarily deep chains are safe.
    pub(crate) fn root_compressing(&mut self, mut element: usize) -> usize {
        let root = self.root(element);

        while self.parent[element] != element {
            let parent = self.parent[element];
            self.parent[element] = root;
            element = parent;
        }

        root
    }

    /// Hangs the root `child` beneath the root `parent`, merging two sets.
    pub(crate) fn link(&mut self, child: usize, parent: usize) {
        debug_assert_eq!(self.parent[child], child, "child must be a root");
        debug_assert_eq!(self.parent[parent], parent, "parent must be a root");
        debug_assert_ne!(child, parent, "cannot link a root to itself");
        self.parent[child] = parent;
        self.sets -= 1;
    }

    /// Number of parent hops from `element` to its root.
    #[cfg(test)]
    pub(crate) fn depth(&self, element: usize) -> usize {
        let mut depth = 0;
        let mut current = element;
        while self.parent[current] != current {
            current = self.parent[current];
            depth += 1;
        }
        depth
    }
}
