//! Connectivity: disjoint sets and component counting
//!
//! [`UnionFind`] answers connectivity over an edge list; `count_components`
//! answers it independently by DFS over adjacency. The two must agree on
//! component count for the same undirected graph, which makes each a
//! cross-check for the other.

pub mod components;
pub mod union_find;

pub use components::count_components;
pub use union_find::UnionFind;
