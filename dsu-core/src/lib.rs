//! Disjoint set union (union-find) core library.
//!
//! Four variants share the [`DisjointSet`] interface and differ only in cost:
//!
//! | variant                          | lookup rewrites path | merge rule              |
//! |----------------------------------|----------------------|-------------------------|
//! | [`NaiveDisjointSet`]             | no                   | left root under right   |
//! | [`PathCompressionDisjointSet`]   | yes                  | left root under right   |
//! | [`SizeDisjointSet`]              | yes                  | smaller tree under larger |
//! | [`RankDisjointSet`]              | yes                  | lower rank under higher |
//!
//! Replaying the same merges on any two variants yields the same partition.
//! Element ids outside `0..len` are rejected with [`DsuError::OutOfBounds`].

mod any;
mod builder;
mod by_rank;
mod by_size;
mod disjoint_set;
mod error;
mod forest;
mod naive;
mod path_compression;
mod shared;
mod variant;

#[cfg(test)]
mod property;

pub use crate::{
    any::AnyDisjointSet,
    builder::DsuBuilder,
    by_rank::RankDisjointSet,
    by_size::SizeDisjointSet,
    disjoint_set::DisjointSet,
    error::{DsuError, DsuErrorCode, Result},
    naive::NaiveDisjointSet,
    path_compression::PathCompressionDisjointSet,
    shared::SharedDisjointSet,
    variant::{ParseVariantError, Variant},
};
