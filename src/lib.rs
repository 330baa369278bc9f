//! Trellis Core Library
//!
//! In-memory, single-process graph algorithms over generic vertex ids:
//! traversal (DFS/BFS), cycle detection, topological sorting, single-source
//! shortest paths (Dijkstra, Bellman-Ford), and connectivity (Union-Find
//! plus DFS component counting).
//!
//! Callers build a [`graph::Graph`] or [`graph::WeightedGraph`], then pass
//! it by shared reference into any algorithm. Algorithms never mutate the
//! graph; every call owns its visited sets, distance maps, and stacks for
//! exactly the duration of that call.

pub mod connectivity;
pub mod cycle;
pub mod error;
pub mod graph;
pub mod logging;
pub mod shortest;
pub mod topo;
pub mod traverse;
