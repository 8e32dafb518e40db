//! Random role and word assignment.
//!
//! Draws are pure functions over an injected `Rng` so outcomes are
//! reproducible under test (seed a `ChaCha8Rng`); production callers seed
//! from OS entropy.

use std::collections::BTreeSet;

use rand::seq::index;
use rand::Rng;

use crate::domain::player::UserId;

/// Imposter counts the host may choose for a roster of `roster_len`.
///
/// Always offers 1; offers 2 once the roster reaches `two_at`.
pub fn imposter_options(roster_len: usize, two_at: usize) -> Vec<usize> {
    if roster_len >= two_at {
        vec![1, 2]
    } else {
        vec![1]
    }
}

/// Draw `count` distinct imposters uniformly from the roster order.
///
/// `count` is clamped to the roster size. Uniform sampling without
/// replacement; the returned set is ordered only for stable display.
pub fn draw_imposters<R: Rng>(order: &[UserId], count: usize, rng: &mut R) -> BTreeSet<UserId> {
    let count = count.min(order.len());
    index::sample(rng, order.len(), count)
        .iter()
        .map(|i| order[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::{draw_imposters, imposter_options};

    #[test]
    fn one_imposter_below_threshold_two_at_or_above() {
        assert_eq!(imposter_options(3, 7), vec![1]);
        assert_eq!(imposter_options(6, 7), vec![1]);
        assert_eq!(imposter_options(7, 7), vec![1, 2]);
        assert_eq!(imposter_options(12, 7), vec![1, 2]);
    }

    #[test]
    fn imposters_are_distinct_members_of_the_roster() {
        let order: Vec<u64> = (1..=9).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let picked = draw_imposters(&order, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        for id in &picked {
            assert!(order.contains(id));
        }
    }

    #[test]
    fn imposter_count_is_clamped_to_roster() {
        let order: Vec<u64> = vec![1, 2];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(draw_imposters(&order, 5, &mut rng).len(), 2);
    }

    #[test]
    fn draws_are_reproducible_under_a_seed() {
        let order: Vec<u64> = (1..=8).collect();
        let a = draw_imposters(&order, 2, &mut ChaCha8Rng::seed_from_u64(7));
        let b = draw_imposters(&order, 2, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
