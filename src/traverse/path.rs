//! Unweighted shortest path via breadth-first search

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Find a minimum-hop path from `start` to `end`.
///
/// BFS explores in non-decreasing hop distance, so the first time `end` is
/// dequeued is necessarily via a minimum-edge-count path. Returns the
/// vertex sequence from `start` to `end` inclusive, or an empty `Vec` when
/// `end` is unreachable from `start`. Both endpoints must be present in the
/// graph.
#[tracing::instrument(skip(graph), fields(start = ?start, end = ?end))]
pub fn shortest_path_unweighted<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    end: &V,
) -> Result<Vec<V>> {
    if !graph.has_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }
    if !graph.has_vertex(end) {
        return Err(GraphError::vertex_not_found(end));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if current == *end {
            return Ok(walk_back(start, end, &predecessors));
        }
        for w in graph.neighbors(&current) {
            if !visited.contains(w) {
                visited.insert(w.clone());
                predecessors.insert(w.clone(), current.clone());
                queue.push_back(w.clone());
            }
        }
    }

    Ok(Vec::new())
}

/// Walk the predecessor map from `end` back to `start`, then reverse.
fn walk_back<V: VertexId>(start: &V, end: &V, predecessors: &HashMap<V, V>) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut current = end.clone();

    while current != *start {
        match predecessors.get(&current) {
            Some(pred) => {
                current = pred.clone();
                path.push(current.clone());
            }
            None => break,
        }
    }

    path.reverse();
    path
}
