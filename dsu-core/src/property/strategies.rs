//! Strategy builders for disjoint-set property tests.
//!
//! Each generator draws a universe size and then a list of union pairs whose
//! shape follows the requested [`Workload`].

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{UnionFixture, Workload};

/// Smallest generated universe.
const MIN_LEN: usize = 1;
/// Largest generated universe. Kept small because several properties inspect
/// every pair of elements.
const MAX_LEN: usize = 48;
/// Largest block used by [`Workload::Clustered`].
const MAX_BLOCK: usize = 5;

/// Generates fixtures covering every workload.
pub(super) fn union_fixture_strategy() -> impl Strategy<Value = UnionFixture> {
    (any::<Workload>(), any::<u64>()).prop_map(|(workload, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(workload, &mut rng)
    })
}

/// Generates a fixture for a specific workload.
///
/// Useful for targeted rstest cases where the workload is chosen explicitly
/// rather than sampled by proptest.
pub(super) fn generate_fixture(workload: Workload, rng: &mut SmallRng) -> UnionFixture {
    let len = rng.gen_range(MIN_LEN..=MAX_LEN);
    let unions = match workload {
        Workload::Random => {
            let count = rng.gen_range(0..=len * 2);
            random_pairs(len, count, rng)
        }
        Workload::Chain => chain_pairs(len, rng),
        Workload::Star => star_pairs(len, rng),
        Workload::Repeated => repeated_pairs(len, rng),
        Workload::Clustered => clustered_pairs(len, rng),
    };

    UnionFixture {
        len,
        unions,
        workload,
    }
}

fn random_pairs(len: usize, count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect()
}

fn orient(left: usize, right: usize, rng: &mut SmallRng) -> (usize, usize) {
    if rng.gen_bool(0.5) {
        (left, right)
    } else {
        (right, left)
    }
}

fn chain_pairs(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    (0..len.saturating_sub(1))
        .map(|node| orient(node, node + 1, rng))
        .collect()
}

fn star_pairs(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let hub = rng.gen_range(0..len);
    (0..len)
        .filter(|&node| node != hub)
        .map(|node| orient(hub, node, rng))
        .collect()
}

fn repeated_pairs(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let base = random_pairs(len, len / 2 + 1, rng);
    let mut unions = base.clone();
    unions.extend(base.iter().map(|&(left, right)| (right, left)));
    unions.extend(base);
    unions
}

fn clustered_pairs(len: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let block = rng.gen_range(1..=MAX_BLOCK);
    let count = rng.gen_range(0..=len * 2);
    (0..count)
        .map(|_| {
            let left = rng.gen_range(0..len);
            let start = left - left % block;
            let right = (start + rng.gen_range(0..block)).min(len - 1);
            (left, right)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Workload::Random)]
    #[case(Workload::Chain)]
    #[case(Workload::Star)]
    #[case(Workload::Repeated)]
    #[case(Workload::Clustered)]
    fn generated_ids_stay_in_range(#[case] workload: Workload) {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            let fixture = generate_fixture(workload, &mut rng);
            assert!((MIN_LEN..=MAX_LEN).contains(&fixture.len));
            assert!(
                fixture
                    .unions
                    .iter()
                    .all(|&(left, right)| left < fixture.len && right < fixture.len)
            );
        }
    }

    #[test]
    fn clustered_pairs_stay_inside_blocks() {
        let mut rng = SmallRng::seed_from_u64(11);
        let pairs = clustered_pairs(40, &mut rng);
        assert!(pairs.iter().all(|&(left, right)| left.abs_diff(right) < MAX_BLOCK));
    }
}
