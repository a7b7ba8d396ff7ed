//! Unbiased in-place shuffle with a caller-supplied RNG.

use rand::Rng;

/// Fisher-Yates shuffle.
///
/// For `i` from the last index down to 1, swap element `i` with an element
/// chosen uniformly from `[0, i]`. Passing a seeded generator makes the
/// permutation reproducible.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reorders_across_seeds() {
        let original: Vec<u32> = (0..20).collect();
        let moved = (0..10u64).any(|seed| {
            let mut items = original.clone();
            shuffle(&mut items, &mut StdRng::seed_from_u64(seed));
            items != original
        });
        assert!(moved);
    }

    #[test]
    fn test_every_position_reachable() {
        // With three items each element should land in the first slot for some seed.
        let mut firsts = std::collections::HashSet::new();
        for seed in 0..200u64 {
            let mut items = vec![0, 1, 2];
            shuffle(&mut items, &mut StdRng::seed_from_u64(seed));
            firsts.insert(items[0]);
        }
        assert_eq!(firsts.len(), 3);
    }
}
