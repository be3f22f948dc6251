//! Leaf extraction from a tree edge list

use super::Edge;
use crate::{GenError, Result};
use serde::{Deserialize, Serialize};

/// Degree-1 nodes of a tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaves {
    /// Leaf ids in ascending order
    pub nodes: Vec<usize>,
    /// Number of leaves
    pub count: usize,
}

/// Nodes with exactly one incident edge
///
/// The tree is taken to have `edges.len() + 1` nodes; edge direction is
/// ignored.
pub fn get_leaves(edges: &[Edge]) -> Result<Leaves> {
    let n = edges.len() + 1;
    let mut degree = vec![0usize; n];

    for &(u, v) in edges {
        for node in [u, v] {
            let slot = degree
                .get_mut(node)
                .ok_or(GenError::NodeOutOfRange { node, nodes: n })?;
            *slot += 1;
        }
    }

    let nodes: Vec<usize> = degree
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == 1)
        .map(|(node, _)| node)
        .collect();
    let count = nodes.len();

    Ok(Leaves { nodes, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star() {
        let leaves = get_leaves(&[(0, 1), (1, 2), (1, 3)]).unwrap();
        assert_eq!(leaves.nodes, vec![0, 2, 3]);
        assert_eq!(leaves.count, 3);
    }

    #[test]
    fn test_direction_is_ignored() {
        let forward = get_leaves(&[(0, 1), (1, 2), (1, 3)]).unwrap();
        let mixed = get_leaves(&[(1, 0), (2, 1), (1, 3)]).unwrap();
        assert_eq!(forward, mixed);
    }

    #[test]
    fn test_chain_and_single_node() {
        assert_eq!(get_leaves(&[(2, 0), (0, 1)]).unwrap().nodes, vec![1, 2]);
        let single = get_leaves(&[]).unwrap();
        assert!(single.nodes.is_empty());
        assert_eq!(single.count, 0);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            get_leaves(&[(0, 5)]),
            Err(GenError::NodeOutOfRange { node: 5, nodes: 2 })
        ));
    }
}
