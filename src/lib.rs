//! # cpgen: random structures for stress-test generators
//!
//! This library produces randomized combinatorial structures for
//! competitive-programming test data: skewed arrays, partition samples,
//! random trees and connected directed graphs. Every generator takes a
//! caller-owned random handle, so a fixed seed always reproduces the same case.
//!
//! ## Features
//!
//! - **Random primitives**: uniform and skewed draws, permutations, partitions
//! - **Generators**: arrays, samples, trees, connected directed graphs, leaves
//! - **Analysis**: tree and reachability checks over edge lists
//! - **Harness**: per-index test files driven by a JSON recipe

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Random-draw primitives and seeding
pub mod random;

/// Structure generators
pub mod generators;

/// Structural analysis of edge lists
pub mod graph;

/// Test-case recipe configuration
pub mod config;

/// Test-case lifecycle and rendering
pub mod testcase;

/// Command-line interface for the `gen` binary
pub mod cli;

/// Structured logging setup
pub mod logging;

// Re-export commonly used types
pub use generators::{
    gen_array, gen_connected_directed_graph, gen_tree, get_leaves, sample, sample_str,
    ConnectedGraph, Edge, Leaves,
};
pub use random::{Numeric, seeded};
pub use config::{CaseRecipe, GeneratorConfig};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A partition request that no composition can satisfy
    #[error("cannot split {total} into {parts} parts of at least {min_part}")]
    InvalidPartition {
        /// Total to split
        total: usize,
        /// Requested number of parts
        parts: usize,
        /// Lower bound on each part
        min_part: usize,
    },

    /// A sample request outside `1..=length`
    #[error("cannot sample {num} elements from a container of length {length}")]
    InvalidSample {
        /// Length of the container
        length: usize,
        /// Requested sample size
        num: usize,
    },

    /// Not enough edges to connect every node
    #[error(
        "a connected graph on {nodes} nodes needs at least {} edges, got {edges}",
        .nodes.saturating_sub(1)
    )]
    TooFewEdges {
        /// Node count
        nodes: usize,
        /// Requested edge count
        edges: usize,
    },

    /// A graph with no nodes has no start node
    #[error("a connected graph needs at least one node")]
    EmptyGraph,

    /// Edge endpoint outside `[0, nodes)`
    #[error("node {node} out of range for {nodes} nodes")]
    NodeOutOfRange {
        /// Offending node id
        node: usize,
        /// Node count
        nodes: usize,
    },

    /// Edge list is not a tree
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    /// Test index range with `first > last`
    #[error("invalid test range {first}..={last}")]
    InvalidRange {
        /// First index
        first: u32,
        /// Last index
        last: u32,
    },

    /// Rejected configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, GenError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generators::{
            gen_array, gen_connected_directed_graph, gen_tree, get_leaves, sample, sample_str,
            ConnectedGraph, Edge, Leaves,
        },
        graph::{all_reachable_from, is_tree, RootedTree},
        random::{seeded, Numeric, WeightedRng},
        config::{CaseRecipe, GeneratorConfig},
        Result, GenError,
    };
}
