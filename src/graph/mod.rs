//! Structural analysis of generated edge lists
//!
//! These are the checks a stress-test author runs against generator output:
//! whether an edge list is a tree, what is reachable from a start node, and
//! how a tree looks once hung from a root.

mod analysis;
mod rooted;

pub use analysis::{
    all_reachable_from, degrees, directed_graph, is_tree, reachable_from, undirected_graph,
};
pub use rooted::RootedTree;

use crate::generators::Edge;
use crate::{GenError, Result};

/// Fail on the first endpoint outside `[0, n)`
fn check_node_range(n: usize, edges: &[Edge]) -> Result<()> {
    match edges.iter().flat_map(|&(u, v)| [u, v]).find(|&node| node >= n) {
        Some(node) => Err(GenError::NodeOutOfRange { node, nodes: n }),
        None => Ok(()),
    }
}
