//! Single-source shortest paths over weighted graphs
//!
//! - `dijkstra`: non-negative weights, binary min-heap with lazy
//!   decrease-key (stale entries are skipped on pop)
//! - `bellman_ford`: negative weights allowed, reachable negative cycles
//!   detected and reported as an error
//! - `ShortestPaths`: the distance/predecessor maps both produce, with
//!   path reconstruction

pub mod bellman_ford;
pub mod dijkstra;
pub mod paths;

pub use bellman_ford::bellman_ford;
pub use dijkstra::{dijkstra, dijkstra_path};
pub use paths::ShortestPaths;
