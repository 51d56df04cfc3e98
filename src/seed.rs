use crate::sparse::Cell;
use rand::{Rng, SeedableRng};

/// Samples `count` cells with both coordinates uniform in `[-radius, radius]`.
///
/// Sampling is with replacement, so the result may hold duplicates; they
/// collapse once the cells are turned into a generation.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_cells(count: usize, radius: i64, seed: Option<u64>) -> Vec<Cell> {
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    (0..count)
        .map(|_| {
            Cell::new(
                rng.gen_range(-radius..=radius),
                rng.gen_range(-radius..=radius),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::random_cells;
    use crate::sparse::Generation;

    #[test]
    fn test_reproducible_with_seed() {
        assert_eq!(random_cells(50, 10, Some(7)), random_cells(50, 10, Some(7)));
        assert_ne!(random_cells(50, 10, Some(7)), random_cells(50, 10, Some(8)));
    }

    #[test]
    fn test_within_radius() {
        let cells = random_cells(1000, 10, Some(42));
        assert_eq!(cells.len(), 1000);
        assert!(cells
            .iter()
            .all(|c| (-10..=10).contains(&c.x) && (-10..=10).contains(&c.y)));
        // both extremes show up in a thousand draws
        assert!(cells.iter().any(|c| c.x == -10));
        assert!(cells.iter().any(|c| c.y == 10));
    }

    #[test]
    fn test_duplicates_are_kept() {
        // 21 * 21 = 441 positions, so 1000 draws must repeat
        let cells = random_cells(1000, 10, Some(1));
        let generation = cells.iter().collect::<Generation>();
        assert!(generation.population() < cells.len());
        assert!(generation.population() <= 441);
    }

    #[test]
    fn test_zero_cells() {
        assert!(random_cells(0, 10, None).is_empty());
    }
}
