//! Skewed random arrays

use crate::random::{Numeric, WeightedRng};
use rand::Rng;

/// Generate `n` independent draws from `[min, max]` with skew `t`
///
/// `t > 0` pushes the expected value toward `max`, `t < 0` toward `min`,
/// and `t == 0` is uniform.
pub fn gen_array<T: Numeric, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    min: T,
    max: T,
    t: i32,
) -> Vec<T> {
    (0..n).map(|_| rng.weighted(min, max, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn test_length_and_bounds() {
        let mut rng = seeded(17);
        let values = gen_array(&mut rng, 100, -3i32, 3, 2);
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
    }

    #[test]
    fn test_empty() {
        let mut rng = seeded(17);
        assert!(gen_array::<u64, _>(&mut rng, 0, 0, 10, 0).is_empty());
    }

    #[test]
    fn test_uniform_histogram() {
        let mut rng = seeded(2024);
        let mut counts = [0usize; 10];
        for _ in 0..10_000 {
            for v in gen_array(&mut rng, 5, 1i32, 10, 0) {
                counts[(v - 1) as usize] += 1;
            }
        }
        // 50_000 draws, 5_000 expected per bucket
        for (bucket, &count) in counts.iter().enumerate() {
            assert!((4_500..=5_500).contains(&count), "bucket {} has {count}", bucket + 1);
        }
    }

    #[test]
    fn test_positive_skew_shifts_mean() {
        let mut rng = seeded(2025);
        let mut sum = 0i64;
        for _ in 0..10_000 {
            sum += gen_array(&mut rng, 5, 1i64, 10, 5).iter().sum::<i64>();
        }
        let mean = sum as f64 / 50_000.0;
        assert!(mean > 7.0, "mean {mean} not above midpoint");
    }

    #[test]
    fn test_float_arrays() {
        let mut rng = seeded(8);
        let values = gen_array(&mut rng, 20, 0.0f64, 1.0, -2);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
