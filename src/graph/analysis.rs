//! Connectivity and reachability checks backed by petgraph

use super::check_node_range;
use crate::generators::Edge;
use crate::{GenError, Result};
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::Bfs;

/// Build an undirected petgraph graph with exactly `n` nodes
pub fn undirected_graph(n: usize, edges: &[Edge]) -> Result<UnGraph<(), ()>> {
    check_node_range(n, edges)?;
    let mut graph = UnGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for &(u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    Ok(graph)
}

/// Build a directed petgraph graph with exactly `n` nodes
pub fn directed_graph(n: usize, edges: &[Edge]) -> Result<DiGraph<(), ()>> {
    check_node_range(n, edges)?;
    let mut graph = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for &(u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    Ok(graph)
}

/// Number of incident edges per node, ignoring direction
pub fn degrees(n: usize, edges: &[Edge]) -> Result<Vec<usize>> {
    check_node_range(n, edges)?;
    let mut degree = vec![0; n];
    for &(u, v) in edges {
        degree[u] += 1;
        degree[v] += 1;
    }
    Ok(degree)
}

/// Whether `edges` form a tree over all `n` nodes when read undirected
pub fn is_tree(n: usize, edges: &[Edge]) -> Result<bool> {
    if n == 0 || edges.len() != n - 1 {
        return Ok(false);
    }
    let graph = undirected_graph(n, edges)?;
    Ok(connected_components(&graph) == 1 && !is_cyclic_undirected(&graph))
}

/// Mark every node reachable from `start` along directed edges
pub fn reachable_from(n: usize, edges: &[Edge], start: usize) -> Result<Vec<bool>> {
    if start >= n {
        return Err(GenError::NodeOutOfRange { node: start, nodes: n });
    }
    let graph = directed_graph(n, edges)?;

    let mut seen = vec![false; n];
    let mut bfs = Bfs::new(&graph, NodeIndex::new(start));
    while let Some(node) = bfs.next(&graph) {
        seen[node.index()] = true;
    }
    Ok(seen)
}

/// Whether every node is reachable from `start`
pub fn all_reachable_from(n: usize, edges: &[Edge], start: usize) -> Result<bool> {
    Ok(reachable_from(n, edges, start)?.into_iter().all(|seen| seen))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(degrees(4, &[(0, 1), (1, 2), (1, 3)]).unwrap(), vec![1, 3, 1, 1]);
        assert!(degrees(2, &[(0, 2)]).is_err());
    }

    #[test]
    fn test_is_tree() {
        assert!(is_tree(1, &[]).unwrap());
        assert!(is_tree(4, &[(0, 1), (2, 1), (1, 3)]).unwrap());
        // right count, but a cycle plus an isolated node
        assert!(!is_tree(4, &[(0, 1), (1, 2), (2, 0)]).unwrap());
        assert!(!is_tree(3, &[(0, 1)]).unwrap());
        assert!(!is_tree(0, &[]).unwrap());
    }

    #[test]
    fn test_reachability_follows_direction() {
        let edges = [(0, 1), (1, 2), (3, 2)];
        assert_eq!(reachable_from(4, &edges, 0).unwrap(), vec![true, true, true, false]);
        assert!(!all_reachable_from(4, &edges, 0).unwrap());
        assert!(all_reachable_from(3, &[(2, 0), (0, 1)], 2).unwrap());
        assert!(reachable_from(2, &[], 2).is_err());
    }
}
