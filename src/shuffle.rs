use rand::Rng;

/// Uniform Fisher-Yates shuffle of a copy of `items`.
///
/// Walks `i` from the last index down to 1, swapping with a `j` drawn from
/// `0..=i`. The caller's slice is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sorted(mut items: Vec<u32>) -> Vec<u32> {
        items.sort_unstable();
        items
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled: Vec<u32> = shuffle(&[], &mut rng);
        assert!(shuffled.is_empty());
    }

    #[test]
    fn test_shuffle_single() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(shuffle(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(1234);
        let items: Vec<u32> = (1..=100).collect();

        let shuffled = shuffle(&items, &mut rng);

        assert_eq!(shuffled.len(), items.len());
        assert_eq!(sorted(shuffled), items);
    }

    #[test]
    fn test_shuffle_leaves_input_untouched() {
        let mut rng = StdRng::seed_from_u64(99);
        let items: Vec<u32> = (1..=10).collect();
        let before = items.clone();

        let _ = shuffle(&items, &mut rng);

        assert_eq!(items, before);
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let items: Vec<u32> = (1..=50).collect();

        let a = shuffle(&items, &mut StdRng::seed_from_u64(5));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(5));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_moves_elements() {
        // With 100 elements the chance of every seed returning the identity is nil.
        let items: Vec<u32> = (1..=100).collect();
        let moved = (0..10u64)
            .map(|seed| shuffle(&items, &mut StdRng::seed_from_u64(seed)))
            .any(|shuffled| shuffled != items);

        assert!(moved);
    }

    #[test]
    fn test_shuffle_hits_every_position() {
        // Each element of a short list should land in every slot over many draws.
        let items = [0usize, 1, 2, 3];
        let mut seen = [[false; 4]; 4];
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..500 {
            for (slot, value) in shuffle(&items, &mut rng).into_iter().enumerate() {
                seen[value][slot] = true;
            }
        }

        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }

    proptest! {
        #[test]
        fn prop_shuffle_preserves_multiset(items in proptest::collection::vec(0u32..20, 0..200), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = shuffle(&items, &mut rng);

            prop_assert_eq!(shuffled.len(), items.len());
            prop_assert_eq!(sorted(shuffled), sorted(items));
        }
    }
}
