//! Balancing and compression invariants.
//!
//! Checks the bookkeeping that separates the optimised variants from the
//! baselines: sizes match membership, ranks only grow on ties and stay within
//! `ceil(log2 n)`, and lookups on the compressing variants leave every visited
//! node one hop from its root.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    DisjointSet, DsuError, NaiveDisjointSet, PathCompressionDisjointSet, RankDisjointSet,
    SizeDisjointSet, forest::ParentForest,
};

use super::oracle::LabelOracle;
use super::types::UnionFixture;

fn op_failed(err: &DsuError) -> TestCaseError {
    TestCaseError::fail(format!("generated operation rejected: {err}"))
}

/// Smallest `k` with `2^k >= len`; zero for empty and singleton universes.
pub(super) fn ceil_log2(len: usize) -> u32 {
    if len <= 1 {
        0
    } else {
        usize::BITS - (len - 1).leading_zeros()
    }
}

/// Sizes equal member counts, and equal-size merges keep the right root.
pub(super) fn run_size_bookkeeping_property(fixture: &UnionFixture) -> TestCaseResult {
    let mut set = SizeDisjointSet::new(fixture.len);
    let mut oracle = LabelOracle::new(fixture.len);

    for &(left, right) in &fixture.unions {
        let left_root = set.find(left).map_err(|err| op_failed(&err))?;
        let right_root = set.find(right).map_err(|err| op_failed(&err))?;
        let left_size = set.set_size(left).map_err(|err| op_failed(&err))?;
        let right_size = set.set_size(right).map_err(|err| op_failed(&err))?;

        set.union(left, right).map_err(|err| op_failed(&err))?;
        oracle.union(left, right);

        let survivor = set.find(left).map_err(|err| op_failed(&err))?;
        let expected_survivor = if left_root == right_root || left_size > right_size {
            left_root
        } else {
            right_root
        };
        if survivor != expected_survivor {
            return Err(TestCaseError::fail(format!(
                "union({left}, {right}) with sizes {left_size}/{right_size} kept root {survivor}, \
                 expected {expected_survivor} (workload={:?})",
                fixture.workload,
            )));
        }
    }

    for element in 0..fixture.len {
        let size = set.set_size(element).map_err(|err| op_failed(&err))?;
        let members = oracle.component_size(element);
        if size != members {
            return Err(TestCaseError::fail(format!(
                "set_size({element}) = {size} but the set has {members} members \
                 (workload={:?}, len={})",
                fixture.workload, fixture.len,
            )));
        }
    }

    Ok(())
}

/// Ranks grow only on ties, bound tree height, and stay within `ceil(log2 n)`.
pub(super) fn run_rank_bounds_property(fixture: &UnionFixture) -> TestCaseResult {
    let mut set = RankDisjointSet::new(fixture.len);
    let mut oracle = LabelOracle::new(fixture.len);

    for &(left, right) in &fixture.unions {
        let joined = set.connected(left, right).map_err(|err| op_failed(&err))?;
        let left_rank = set.rank_of(left).map_err(|err| op_failed(&err))?;
        let right_rank = set.rank_of(right).map_err(|err| op_failed(&err))?;

        set.union(left, right).map_err(|err| op_failed(&err))?;
        oracle.union(left, right);

        let rank = set.rank_of(left).map_err(|err| op_failed(&err))?;
        let expected = if !joined && left_rank == right_rank {
            left_rank + 1
        } else {
            left_rank.max(right_rank)
        };
        if rank != expected {
            return Err(TestCaseError::fail(format!(
                "union({left}, {right}) with ranks {left_rank}/{right_rank} (joined={joined}) \
                 produced rank {rank}, expected {expected} (workload={:?})",
                fixture.workload,
            )));
        }
    }

    let bound = ceil_log2(fixture.len);
    for element in 0..fixture.len {
        let rank = set.rank_of(element).map_err(|err| op_failed(&err))?;
        let depth = set.forest().depth(element);
        let members = oracle.component_size(element);

        if u32::from(rank) > bound {
            return Err(TestCaseError::fail(format!(
                "rank {rank} of {element}'s root exceeds ceil(log2 {}) = {bound}",
                fixture.len,
            )));
        }
        if depth > usize::from(rank) {
            return Err(TestCaseError::fail(format!(
                "{element} sits at depth {depth}, above its root's rank {rank}",
            )));
        }
        if (1_usize << rank) > members {
            return Err(TestCaseError::fail(format!(
                "rank {rank} root of {element} has only {members} members",
            )));
        }
    }

    Ok(())
}

/// Replays the fixture, then looks up every element and checks the path it
/// leaves behind with `check(element, depth_before, depth_after)`.
fn replay_then_probe<D: DisjointSet>(
    fixture: &UnionFixture,
    mut set: D,
    forest: impl Fn(&D) -> &ParentForest,
    check: impl Fn(usize, usize, usize) -> TestCaseResult,
) -> TestCaseResult {
    for &(left, right) in &fixture.unions {
        set.union(left, right).map_err(|err| op_failed(&err))?;
    }
    for element in 0..fixture.len {
        let before = forest(&set).depth(element);
        set.find(element).map_err(|err| op_failed(&err))?;
        let after = forest(&set).depth(element);
        check(element, before, after)?;
    }
    Ok(())
}

fn flattened(element: usize, _before: usize, after: usize) -> TestCaseResult {
    if after > 1 {
        return Err(TestCaseError::fail(format!(
            "{element} is still {after} hops from its root after find",
        )));
    }
    Ok(())
}

/// Compressing variants leave each looked-up element one hop from its root;
/// the naive variant leaves every path untouched.
pub(super) fn run_compression_property(fixture: &UnionFixture) -> TestCaseResult {
    replay_then_probe(
        fixture,
        PathCompressionDisjointSet::new(fixture.len),
        PathCompressionDisjointSet::forest,
        flattened,
    )?;
    replay_then_probe(
        fixture,
        SizeDisjointSet::new(fixture.len),
        SizeDisjointSet::forest,
        flattened,
    )?;
    replay_then_probe(
        fixture,
        RankDisjointSet::new(fixture.len),
        RankDisjointSet::forest,
        flattened,
    )?;
    replay_then_probe(
        fixture,
        NaiveDisjointSet::new(fixture.len),
        NaiveDisjointSet::forest,
        |element, before, after| {
            if before == after {
                Ok(())
            } else {
                Err(TestCaseError::fail(format!(
                    "naive find moved {element} from depth {before} to {after}",
                )))
            }
        },
    )
}
