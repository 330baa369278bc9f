//! Graph traversal and unweighted path-finding
//!
//! Provides single-source walks over a [`crate::graph::Graph`]:
//! - DFS in recursive and explicit-stack variants
//! - BFS, plain or bounded by [`crate::graph::TraverseOptions`]
//! - Minimum-hop path between two vertices

pub mod bfs;
pub mod dfs;
pub mod path;

pub use bfs::{bfs, bfs_with_options};
pub use dfs::{dfs, dfs_iterative};
pub use path::shortest_path_unweighted;

#[cfg(test)]
mod tests;
