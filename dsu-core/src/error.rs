//! Error types for the disjoint-set core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DsuError {
    /// Requested element id was outside the universe `0..len`.
    #[error("element {element} is out of bounds for a universe of {len} elements")]
    OutOfBounds {
        /// The element id supplied by the caller.
        element: usize,
        /// Number of elements in the universe.
        len: usize,
    },
    /// The lock guarding a [`crate::SharedDisjointSet`] was poisoned by a
    /// panicking holder.
    #[error("lock guarding the {resource} was poisoned")]
    LockPoisoned {
        /// Human-readable name of the guarded resource.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`DsuError`] variants.
    enum DsuErrorCode for DsuError {
        /// Requested element id was outside the universe.
        OutOfBounds => OutOfBounds { .. } => "DSU_OUT_OF_BOUNDS",
        /// The lock guarding a shared structure was poisoned.
        LockPoisoned => LockPoisoned { .. } => "DSU_LOCK_POISONED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DsuError>;
