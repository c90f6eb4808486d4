//! Partition laws checked against the relabelling oracle.
//!
//! For a single variant, verifies that `connected` is an equivalence relation
//! agreeing with the oracle, and that the set count drops by exactly one on
//! every merging union and stays put on every redundant one.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AnyDisjointSet, DisjointSet, Variant};

use super::oracle::LabelOracle;
use super::types::UnionFixture;

/// Elements beyond this index are skipped by the cubic transitivity sweep.
const TRANSITIVITY_WINDOW: usize = 16;

/// Runs the partition laws for `variant` on the given fixture.
pub(super) fn run_partition_laws_property(
    fixture: &UnionFixture,
    variant: Variant,
) -> TestCaseResult {
    let mut set = AnyDisjointSet::new(variant, fixture.len);
    let mut oracle = LabelOracle::new(fixture.len);

    check_reflexive(&mut set, fixture, variant)?;

    for (step, &(left, right)) in fixture.unions.iter().enumerate() {
        let before = set.set_count();
        let merges = oracle.union(left, right);
        set.union(left, right).map_err(|err| {
            TestCaseError::fail(format!("union({left}, {right}) failed at step {step}: {err}"))
        })?;

        let expected = if merges { before - 1 } else { before };
        if set.set_count() != expected {
            return Err(TestCaseError::fail(format!(
                "set count {} after union({left}, {right}) at step {step}, expected {expected} \
                 (variant={variant}, workload={:?}, len={})",
                set.set_count(),
                fixture.workload,
                fixture.len,
            )));
        }
    }

    if set.set_count() != oracle.set_count() {
        return Err(TestCaseError::fail(format!(
            "set count mismatch: {variant}={}, oracle={} (workload={:?}, len={})",
            set.set_count(),
            oracle.set_count(),
            fixture.workload,
            fixture.len,
        )));
    }

    check_reflexive(&mut set, fixture, variant)?;
    check_against_oracle(&mut set, &oracle, fixture, variant)?;
    check_transitive(&mut set, fixture, variant)
}

fn connected(set: &mut AnyDisjointSet, left: usize, right: usize) -> Result<bool, TestCaseError> {
    set.connected(left, right)
        .map_err(|err| TestCaseError::fail(format!("connected({left}, {right}) failed: {err}")))
}

fn check_reflexive(
    set: &mut AnyDisjointSet,
    fixture: &UnionFixture,
    variant: Variant,
) -> TestCaseResult {
    for element in 0..fixture.len {
        if !connected(set, element, element)? {
            return Err(TestCaseError::fail(format!(
                "{element} is not connected to itself (variant={variant}, workload={:?})",
                fixture.workload,
            )));
        }
    }
    Ok(())
}

/// Checks agreement with the oracle and symmetry over every ordered pair.
fn check_against_oracle(
    set: &mut AnyDisjointSet,
    oracle: &LabelOracle,
    fixture: &UnionFixture,
    variant: Variant,
) -> TestCaseResult {
    for left in 0..fixture.len {
        for right in 0..fixture.len {
            let forward = connected(set, left, right)?;
            let backward = connected(set, right, left)?;
            if forward != backward {
                return Err(TestCaseError::fail(format!(
                    "connected is not symmetric for ({left}, {right}): {forward} vs {backward} \
                     (variant={variant}, workload={:?})",
                    fixture.workload,
                )));
            }
            if forward != oracle.connected(left, right) {
                return Err(TestCaseError::fail(format!(
                    "connected({left}, {right}) = {forward} disagrees with oracle \
                     (variant={variant}, workload={:?}, len={})",
                    fixture.workload, fixture.len,
                )));
            }
        }
    }
    Ok(())
}

fn check_transitive(
    set: &mut AnyDisjointSet,
    fixture: &UnionFixture,
    variant: Variant,
) -> TestCaseResult {
    let window = fixture.len.min(TRANSITIVITY_WINDOW);
    for x in 0..window {
        for y in 0..window {
            if !connected(set, x, y)? {
                continue;
            }
            for z in 0..window {
                if connected(set, y, z)? && !connected(set, x, z)? {
                    return Err(TestCaseError::fail(format!(
                        "transitivity broken for ({x}, {y}, {z}) \
                         (variant={variant}, workload={:?})",
                        fixture.workload,
                    )));
                }
            }
        }
    }
    Ok(())
}
