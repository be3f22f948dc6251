//! Connected directed graphs

use super::{sample, tree::spanning_parents, Edge};
use crate::random::{permutation, shuffle};
use crate::{GenError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Directed graph in which every node is reachable from `start`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedGraph {
    /// Directed edges, shuffled
    pub edges: Vec<Edge>,
    /// Node every other node is reachable from
    pub start: usize,
}

/// Generate `m` directed edges on `n` nodes, all reachable from a start node
///
/// The first `n - 1` edges form a spanning tree oriented away from the start
/// node, shaped by `t` as in [`gen_tree`](super::gen_tree). The remaining
/// `m - (n - 1)` edges join two distinct random nodes and may repeat
/// existing edges or close cycles.
pub fn gen_connected_directed_graph<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    t: i32,
) -> Result<ConnectedGraph> {
    if n == 0 {
        return Err(GenError::EmptyGraph);
    }
    if m < n - 1 {
        return Err(GenError::TooFewEdges { nodes: n, edges: m });
    }

    let parents = spanning_parents(rng, n, t);
    let perm = permutation(rng, n);

    let mut edges: Vec<Edge> = Vec::with_capacity(m);
    edges.extend(
        parents
            .iter()
            .enumerate()
            .map(|(idx, &parent)| (perm[parent], perm[idx + 1])),
    );
    let start = perm[0];

    for _ in n..=m {
        let pair = sample(rng, &perm, 2)?;
        edges.push((pair[0], pair[1]));
    }

    shuffle(rng, &mut edges);
    tracing::trace!(nodes = n, edges = m, start, "generated connected directed graph");

    Ok(ConnectedGraph { edges, start })
}
