//! Random structure generators
//!
//! Each generator is a stateless function of its arguments and the random
//! handle it is given. Node ids are always in `[0, n)`.

mod array;
mod sample;
mod tree;
mod graph;
mod leaves;

pub use array::gen_array;
pub use sample::{sample, sample_str};
pub use tree::gen_tree;
pub use graph::{gen_connected_directed_graph, ConnectedGraph};
pub use leaves::{get_leaves, Leaves};

/// Ordered pair of node ids, directed first to second
pub type Edge = (usize, usize);
