//! Error types for trellis
//!
//! Failures are reported synchronously to the immediate caller; nothing is
//! retried and there is no process-level failure mode. Adjacency lookup
//! misses are not errors (see `Graph::neighbors`), but handing an algorithm
//! entry point a start or source vertex that is not in the graph is.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error(
        "negative weight {weight} on edge {from} -> {to} \
         (dijkstra requires non-negative weights; use bellman_ford)"
    )]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative-weight cycle reachable from source")]
    NegativeCycle,

    #[error("graph contains a cycle")]
    CycleDetected,
}

impl GraphError {
    /// Create an error for a start or source vertex missing from the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an edge weight rejected by dijkstra
    pub fn negative_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, GraphError>;
