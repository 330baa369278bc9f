//! Adjacency-list graph structures
//!
//! Both variants keep a `HashMap` from vertex id to its out-neighbor list
//! plus an insertion-ordered vertex list backing `vertices()`. Self-loops
//! and parallel edges are permitted and never deduplicated: each `add_edge`
//! call appends unconditionally, and downstream algorithms treat duplicate
//! adjacency entries as distinct edges.

use crate::graph::types::{VertexId, Weight};
use std::collections::HashMap;

/// Unweighted graph, directed or undirected (fixed at construction).
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: VertexId> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a vertex with an empty adjacency list. No-op when present.
    pub fn add_vertex(&mut self, v: V) {
        if !self.adjacency.contains_key(&v) {
            self.order.push(v.clone());
            self.adjacency.insert(v, Vec::new());
        }
    }

    /// Insert an edge, auto-inserting both endpoints. Appends
    /// unconditionally; an undirected self-loop therefore appears twice in
    /// its own adjacency list because the reciprocal append still runs.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(v.clone());
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.push(u);
            }
        }
    }

    /// Out-neighbors of `v` in insertion order. A lookup miss returns the
    /// empty slice, never an error; callers that must distinguish "no
    /// edges" from "no such vertex" check [`Graph::has_vertex`] first.
    pub fn neighbors(&self, v: &V) -> &[V] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertices in first-seen order (`add_vertex` or `add_edge`).
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges inserted via `add_edge`.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            entries
        } else {
            // each undirected insertion stored two entries, self-loops included
            entries / 2
        }
    }
}

/// Weighted graph; same invariants as [`Graph`] with `(neighbor, weight)`
/// adjacency entries. Weight sign is unrestricted here — Dijkstra's
/// non-negativity requirement is enforced at the algorithm boundary.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    directed: bool,
    order: Vec<V>,
    adjacency: HashMap<V, Vec<(V, Weight)>>,
}

impl<V: VertexId> WeightedGraph<V> {
    pub fn new(directed: bool) -> Self {
        WeightedGraph {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a vertex with an empty adjacency list. No-op when present.
    pub fn add_vertex(&mut self, v: V) {
        if !self.adjacency.contains_key(&v) {
            self.order.push(v.clone());
            self.adjacency.insert(v, Vec::new());
        }
    }

    /// Insert a weighted edge, auto-inserting both endpoints.
    pub fn add_edge(&mut self, u: V, v: V, weight: impl Into<Weight>) {
        let weight = weight.into();
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push((v.clone(), weight));
        }
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.push((u, weight));
            }
        }
    }

    /// Weighted out-neighbors of `v`; empty slice on lookup miss.
    pub fn neighbors(&self, v: &V) -> &[(V, Weight)] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertices in first-seen order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges inserted via `add_edge`.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            entries
        } else {
            entries / 2
        }
    }

    /// Every stored adjacency entry as `(from, to, weight)`, in vertex
    /// insertion order. Undirected edges yield one entry per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        self.order.iter().flat_map(move |u| {
            self.neighbors(u).iter().map(move |(v, w)| (u, v, *w))
        })
    }
}
