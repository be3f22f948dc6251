//! Tree edge lists hung from a chosen root

use super::is_tree;
use crate::generators::Edge;
use crate::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A tree oriented away from its root
///
/// - Each node stores the ids of its children
/// - Children appear in the order their edges were listed
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootedTree {
    root: usize,
    /// `parent[i]` is `None` only for the root
    parent: Vec<Option<usize>>,
    /// Adjacency list: children[i] contains ids of node i's children
    children: Vec<Vec<usize>>,
}

impl RootedTree {
    /// Orient an undirected tree edge list away from `root`
    pub fn from_edges(n: usize, edges: &[Edge], root: usize) -> Result<Self> {
        if root >= n {
            return Err(GenError::NodeOutOfRange { node: root, nodes: n });
        }
        if !is_tree(n, edges)? {
            return Err(GenError::InvalidTree(format!(
                "{} edges do not connect {} nodes without cycles",
                edges.len(),
                n
            )));
        }

        let mut adjacent = vec![Vec::new(); n];
        for &(u, v) in edges {
            adjacent[u].push(v);
            adjacent[v].push(u);
        }

        let mut parent = vec![None; n];
        let mut children = vec![Vec::new(); n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        queue.push_back(root);
        visited[root] = true;

        while let Some(node) = queue.pop_front() {
            for &next in &adjacent[node] {
                if !visited[next] {
                    visited[next] = true;
                    parent[next] = Some(node);
                    children[node].push(next);
                    queue.push_back(next);
                }
            }
        }

        Ok(RootedTree { root, parent, children })
    }

    /// Get the number of nodes
    pub fn size(&self) -> usize {
        self.children.len()
    }

    /// Root node id
    pub fn root(&self) -> usize {
        self.root
    }

    /// Get children of a node
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Parent of a node (None for root)
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// Nodes in breadth-first order from the root
    fn bfs_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.size());
        order.push(self.root);
        let mut head = 0;
        while head < order.len() {
            let node = order[head];
            order.extend_from_slice(&self.children[node]);
            head += 1;
        }
        order
    }

    /// Compute depth of each node
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.size()];
        for node in self.bfs_order() {
            if let Some(parent) = self.parent[node] {
                depths[node] = depths[parent] + 1;
            }
        }
        depths
    }

    /// Depth of the deepest node
    pub fn height(&self) -> usize {
        self.depths().into_iter().max().unwrap_or(0)
    }

    /// Count of nodes without children
    ///
    /// Unlike [`get_leaves`](crate::get_leaves) this never counts the root,
    /// except in a single-node tree.
    pub fn leaf_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_empty()).count()
    }

    /// Size of the subtree under every node, root included
    pub fn subtree_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![1; self.size()];
        for node in self.bfs_order().into_iter().rev() {
            if let Some(parent) = self.parent[node] {
                sizes[parent] += sizes[node];
            }
        }
        sizes
    }

    /// Compute subtree size rooted at a given node
    pub fn subtree_size(&self, node: usize) -> usize {
        let mut size = 0;
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            size += 1;
            stack.extend_from_slice(&self.children[current]);
        }
        size
    }

    /// Get the path from the root to a node
    pub fn path_to_root(&self, mut node: usize) -> Vec<usize> {
        let mut path = vec![node];
        while let Some(parent) = self.parent[node] {
            path.push(parent);
            node = parent;
        }
        path.reverse();
        path
    }
}

impl fmt::Debug for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RootedTree(size={}, root={})", self.size(), self.root)?;

        let mut stack = vec![(self.root, 0)];
        while let Some((node, indent)) = stack.pop() {
            writeln!(f, "{}● {}", "  ".repeat(indent), node)?;
            for &child in self.children[node].iter().rev() {
                stack.push((child, indent + 1));
            }
        }
        Ok(())
    }
}
