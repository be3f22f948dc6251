//! Permutations, partitions and shuffles

use crate::{GenError, Result};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Uniformly random permutation of `[0, n)`
pub fn permutation<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// In-place uniform reordering
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

/// Split `total` into `parts` integers, each at least `min_part`
///
/// Every composition is equally likely: after reserving `min_part` per part,
/// the remaining units are laid out with `parts - 1` bars chosen uniformly
/// among `free + parts - 1` slots.
pub fn partition<R: Rng + ?Sized>(
    rng: &mut R,
    total: usize,
    parts: usize,
    min_part: usize,
) -> Result<Vec<usize>> {
    let invalid = GenError::InvalidPartition { total, parts, min_part };

    if parts == 0 {
        return if total == 0 { Ok(Vec::new()) } else { Err(invalid) };
    }

    let reserved = match parts.checked_mul(min_part) {
        Some(reserved) if reserved <= total => reserved,
        _ => return Err(invalid),
    };
    let slots = total - reserved + parts - 1;

    let mut bars = index::sample(rng, slots, parts - 1).into_vec();
    bars.sort_unstable();

    let mut result = Vec::with_capacity(parts);
    let mut start = 0;
    for bar in bars {
        result.push(bar - start + min_part);
        start = bar + 1;
    }
    result.push(slots - start + min_part);

    Ok(result)
}
