//! Sampling one element per random segment

use crate::random::{partition, shuffle};
use crate::{GenError, Result};
use rand::Rng;

/// Pick `num` elements from distinct positions of `items`
///
/// `items` is split into `num` non-empty contiguous segments of random
/// length; one uniform element is taken from each segment and the picks are
/// shuffled so segment order does not show in the output. To sample from a
/// prefix of length `length`, pass `&items[..length]`.
pub fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], num: usize) -> Result<Vec<T>> {
    let length = items.len();
    if num == 0 || num > length {
        return Err(GenError::InvalidSample { length, num });
    }

    let segments = partition(rng, length, num, 1)?;

    let mut result = Vec::with_capacity(num);
    let mut start = 0;
    for segment in segments {
        let pick = rng.gen_range(start..start + segment);
        result.push(items[pick].clone());
        start += segment;
    }

    shuffle(rng, &mut result);
    Ok(result)
}

/// [`sample`] over the characters of a string
pub fn sample_str<R: Rng + ?Sized>(rng: &mut R, text: &str, num: usize) -> Result<String> {
    let chars: Vec<char> = text.chars().collect();
    Ok(sample(rng, &chars, num)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;
    use std::collections::HashSet;

    #[test]
    fn test_distinct_positions() {
        let mut rng = seeded(31);
        let items: Vec<usize> = (0..40).collect();
        for num in [1, 2, 13, 40] {
            let picked = sample(&mut rng, &items, num).unwrap();
            assert_eq!(picked.len(), num);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), num);
        }
    }

    #[test]
    fn test_full_sample_is_permutation() {
        let mut rng = seeded(32);
        let items = vec![5, 6, 7, 8];
        let mut picked = sample(&mut rng, &items, 4).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, items);
    }

    #[test]
    fn test_prefix_only() {
        let mut rng = seeded(33);
        let items = vec![1, 2, 3, 100, 200];
        for _ in 0..50 {
            let picked = sample(&mut rng, &items[..3], 2).unwrap();
            assert!(picked.iter().all(|v| *v <= 3));
        }
    }

    #[test]
    fn test_rejects_bad_counts() {
        let mut rng = seeded(34);
        assert!(matches!(
            sample(&mut rng, &[1, 2], 3),
            Err(GenError::InvalidSample { length: 2, num: 3 })
        ));
        assert!(sample(&mut rng, &[1, 2], 0).is_err());
        assert!(sample::<u8, _>(&mut rng, &[], 1).is_err());
    }

    #[test]
    fn test_segment_order_is_hidden() {
        let items: Vec<usize> = (0..10).collect();
        let mut sorted = 0;
        let mut min_first = 0;
        for seed in 0..200 {
            let picked = sample(&mut seeded(seed), &items, 10).unwrap();
            if picked.windows(2).all(|w| w[0] < w[1]) {
                sorted += 1;
            }
            if picked[0] == 0 {
                min_first += 1;
            }
        }
        // a uniform shuffle sorts 10 items once in 10! tries, leads with 0 one time in 10
        assert!(sorted < 2, "{sorted} of 200 samples came back sorted");
        assert!(min_first < 50, "smallest value led {min_first} of 200 samples");
    }

    #[test]
    fn test_sample_str() {
        let mut rng = seeded(35);
        let picked = sample_str(&mut rng, "abcdef", 3).unwrap();
        assert_eq!(picked.chars().count(), 3);
        assert!(picked.chars().all(|c| "abcdef".contains(c)));
    }
}
