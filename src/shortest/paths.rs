//! Shortest-path results and path reconstruction

use crate::graph::{VertexId, Weight};
use serde::Serialize;
use std::collections::HashMap;

/// Distances and predecessors computed by one single-source run.
///
/// Every vertex of the input graph has a distance entry; unreachable
/// vertices carry [`Weight::INFINITY`] and no predecessor. The maps are
/// owned by the caller once returned — nothing is shared across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<V: std::cmp::Eq + std::hash::Hash> {
    pub source: V,
    pub distances: HashMap<V, Weight>,
    pub predecessors: HashMap<V, V>,
}

impl<V: VertexId> ShortestPaths<V> {
    pub(crate) fn new(source: V, vertices: &[V]) -> Self {
        let mut distances: HashMap<V, Weight> = vertices
            .iter()
            .map(|v| (v.clone(), Weight::INFINITY))
            .collect();
        distances.insert(source.clone(), Weight::ZERO);
        Self {
            source,
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Shortest known distance to `v`; None when `v` is unknown or
    /// unreachable.
    pub fn distance(&self, v: &V) -> Option<Weight> {
        self.distances.get(v).copied().filter(|w| w.is_finite())
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some()
    }

    /// Reconstruct the path from the source to `v` by walking the
    /// predecessor map backwards. None when `v` is unreachable.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v.clone()];
        let mut current = v.clone();
        while current != self.source {
            let pred = self.predecessors.get(&current)?;
            current = pred.clone();
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }
}
