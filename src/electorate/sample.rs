use rand::RngCore;

/// Draw `n` i.i.d. ideology positions uniformly from `[low, high)`.
///
/// `n = 0` yields an empty vector. All randomness comes from the caller's
/// `rng`, so a seeded source makes the draw reproducible.
///
/// # Panics
/// Panics if `low >= high` or either bound is non-finite; run
/// configuration is validated before any sampling happens.
pub fn sample_positions(n: usize, low: f64, high: f64, rng: &mut dyn RngCore) -> Vec<f64> {
    use rand::Rng;

    (0..n).map(|_| rng.random_range(low..high)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn samples_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let positions = sample_positions(1000, 0.0, 100.0, &mut rng);
        assert_eq!(positions.len(), 1000);
        assert!(positions.iter().all(|&p| (0.0..100.0).contains(&p)));
    }

    #[test]
    fn zero_samples_yield_empty() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(sample_positions(0, 0.0, 100.0, &mut rng).is_empty());
    }

    #[test]
    fn custom_bounds_respected() {
        let mut rng = SmallRng::seed_from_u64(11);
        let positions = sample_positions(200, -5.0, 5.0, &mut rng);
        assert!(positions.iter().all(|&p| (-5.0..5.0).contains(&p)));
    }

    #[test]
    fn same_seed_same_positions() {
        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);
        assert_eq!(
            sample_positions(50, 0.0, 100.0, &mut rng1),
            sample_positions(50, 0.0, 100.0, &mut rng2)
        );
    }
}
