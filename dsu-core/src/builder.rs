//! Builder for runtime-configured disjoint sets.
//!
//! Collects the universe size and the algorithm choice before constructing an
//! [`AnyDisjointSet`].

use tracing::instrument;

use crate::{AnyDisjointSet, Variant};

/// Configures and constructs [`AnyDisjointSet`] instances.
///
/// # Examples
/// ```
/// use dsu_core::{DisjointSet, DsuBuilder, Variant};
///
/// let set = DsuBuilder::new()
///     .with_len(8)
///     .with_variant(Variant::BySize)
///     .build();
/// assert_eq!(set.len(), 8);
/// assert_eq!(set.variant(), Variant::BySize);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DsuBuilder {
    len: usize,
    variant: Variant,
}

impl DsuBuilder {
    /// Creates a builder for an empty universe using [`Variant::default`].
    ///
    /// # Examples
    /// ```
    /// use dsu_core::{DsuBuilder, Variant};
    ///
    /// let builder = DsuBuilder::new();
    /// assert_eq!(builder.len(), 0);
    /// assert_eq!(builder.variant(), Variant::ByRank);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of elements in the universe.
    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Returns the configured universe size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the configured universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selects the algorithm.
    ///
    /// # Examples
    /// ```
    /// use dsu_core::{DsuBuilder, Variant};
    ///
    /// let builder = DsuBuilder::new().with_variant(Variant::Naive);
    /// assert_eq!(builder.variant(), Variant::Naive);
    /// ```
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Constructs the configured structure with every element in its own set.
    #[must_use]
    #[instrument(name = "dsu.build", skip(self), fields(len = self.len, variant = %self.variant))]
    pub fn build(&self) -> AnyDisjointSet {
        AnyDisjointSet::new(self.variant, self.len)
    }
}
