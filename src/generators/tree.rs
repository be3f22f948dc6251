//! Random trees

use super::Edge;
use crate::random::{permutation, shuffle, WeightedRng};
use rand::Rng;

/// Parent index for every node `1..n`, drawn from the nodes before it
///
/// Entry `i - 1` holds the parent of node `i`. Low `t` gives bushy trees;
/// large `t` keeps choosing `i - 1` and degenerates into a chain.
pub(crate) fn spanning_parents<R: Rng + ?Sized>(rng: &mut R, n: usize, t: i32) -> Vec<usize> {
    (1..n).map(|i| rng.weighted_below(i, t)).collect()
}

/// Generate a random tree on `n` nodes as `n - 1` edges
///
/// Node labels are a random permutation of `[0, n)`, each edge points in a
/// random direction and the edge list is shuffled. Expected height grows
/// with `t`; at `t == 0` it is logarithmic in `n`.
pub fn gen_tree<R: Rng + ?Sized>(rng: &mut R, n: usize, t: i32) -> Vec<Edge> {
    let parents = spanning_parents(rng, n, t);
    let perm = permutation(rng, n);

    let mut edges: Vec<Edge> = parents
        .iter()
        .enumerate()
        .map(|(idx, &parent)| {
            let (child, parent) = (perm[idx + 1], perm[parent]);
            if rng.gen_bool(0.5) {
                (child, parent)
            } else {
                (parent, child)
            }
        })
        .collect();

    shuffle(rng, &mut edges);
    edges
}
