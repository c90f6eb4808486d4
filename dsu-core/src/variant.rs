//! Selection of the disjoint-set algorithm.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Identifies one of the four disjoint-set strategies.
///
/// `ByRank` is the default: it is the variant with the tightest worst-case
/// tree height.
///
/// # Examples
/// ```
/// use dsu_core::Variant;
///
/// let variant: Variant = "by-size".parse()?;
/// assert_eq!(variant, Variant::BySize);
/// assert_eq!(variant.to_string(), "by-size");
/// assert_eq!(Variant::default(), Variant::ByRank);
/// # Ok::<(), dsu_core::ParseVariantError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Variant {
    /// No compression, no balancing.
    Naive,
    /// Path compression without balancing.
    PathCompression,
    /// Union by size with path compression.
    BySize,
    /// Union by rank with path compression.
    #[default]
    ByRank,
}

impl Variant {
    /// Every variant, from the baseline to the fully optimised one.
    pub const ALL: [Self; 4] = [
        Self::Naive,
        Self::PathCompression,
        Self::BySize,
        Self::ByRank,
    ];

    /// Stable label used on the command line and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::PathCompression => "path-compression",
            Self::BySize => "by-size",
            Self::ByRank => "by-rank",
        }
    }

    /// Whether lookups rewrite the parent pointers they traverse.
    #[must_use]
    pub const fn compresses_paths(self) -> bool {
        !matches!(self, Self::Naive)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Variant`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "unknown disjoint-set variant `{provided}`; expected one of naive, path-compression, by-size, by-rank"
)]
pub struct ParseVariantError {
    /// Raw value supplied by the caller.
    pub provided: String,
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == normalized)
            .ok_or_else(|| ParseVariantError {
                provided: raw.to_owned(),
            })
    }
}
