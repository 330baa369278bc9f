//! Graph data structures
//!
//! Owns the vertex set and adjacency relation, in directed/undirected and
//! weighted/unweighted variants. The structures here are mutated only
//! through `add_vertex`/`add_edge`; every algorithm module takes them by
//! shared reference and never mutates them.

pub mod adjacency;
pub mod types;

pub use adjacency::{Graph, WeightedGraph};
pub use types::{Traversal, TraverseOptions, VertexId, Weight};
