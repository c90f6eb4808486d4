//! Runtime selection between the disjoint-set variants.

use crate::{
    DisjointSet, NaiveDisjointSet, PathCompressionDisjointSet, RankDisjointSet, SizeDisjointSet,
    Variant, error::Result,
};

/// A disjoint set whose [`Variant`] is chosen at runtime.
///
/// Every variant exposes the same partition semantics, so callers that only
/// need [`DisjointSet`] can switch algorithms without changing types.
///
/// # Examples
/// ```
/// use dsu_core::{AnyDisjointSet, DisjointSet, Variant};
///
/// let mut set = AnyDisjointSet::new(Variant::PathCompression, 3);
/// set.union(0, 2)?;
/// assert_eq!(set.variant(), Variant::PathCompression);
/// assert_eq!(set.components(), vec![vec![0, 2], vec![1]]);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Clone, Debug)]
pub enum AnyDisjointSet {
    /// See [`NaiveDisjointSet`].
    Naive(NaiveDisjointSet),
    /// See [`PathCompressionDisjointSet`].
    PathCompression(PathCompressionDisjointSet),
    /// See [`SizeDisjointSet`].
    BySize(SizeDisjointSet),
    /// See [`RankDisjointSet`].
    ByRank(RankDisjointSet),
}

macro_rules! delegate {
    ($self:expr, $set:ident => $call:expr) => {
        match $self {
            AnyDisjointSet::Naive($set) => $call,
            AnyDisjointSet::PathCompression($set) => $call,
            AnyDisjointSet::BySize($set) => $call,
            AnyDisjointSet::ByRank($set) => $call,
        }
    };
}

impl AnyDisjointSet {
    /// Creates `len` singleton sets managed by `variant`.
    #[must_use]
    pub fn new(variant: Variant, len: usize) -> Self {
        match variant {
            Variant::Naive => Self::Naive(NaiveDisjointSet::new(len)),
            Variant::PathCompression => {
                Self::PathCompression(PathCompressionDisjointSet::new(len))
            }
            Variant::BySize => Self::BySize(SizeDisjointSet::new(len)),
            Variant::ByRank => Self::ByRank(RankDisjointSet::new(len)),
        }
    }

    /// The algorithm backing this structure.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Naive(_) => Variant::Naive,
            Self::PathCompression(_) => Variant::PathCompression,
            Self::BySize(_) => Variant::BySize,
            Self::ByRank(_) => Variant::ByRank,
        }
    }
}

impl DisjointSet for AnyDisjointSet {
    fn with_len(len: usize) -> Self {
        Self::new(Variant::default(), len)
    }

    fn len(&self) -> usize {
        delegate!(self, set => set.len())
    }

    fn set_count(&self) -> usize {
        delegate!(self, set => set.set_count())
    }

    fn find(&mut self, element: usize) -> Result<usize> {
        delegate!(self, set => set.find(element))
    }

    fn union(&mut self, left: usize, right: usize) -> Result<()> {
        delegate!(self, set => set.union(left, right))
    }
}
