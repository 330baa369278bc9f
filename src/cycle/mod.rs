//! Cycle detection
//!
//! Undirected detection is parent-aware DFS: a visited neighbor that is not
//! reached along the tree edge back to the immediate parent closes a cycle.
//! Directed detection tracks the in-progress path separately from the
//! finished set: only a back-edge to a vertex still on the current path is
//! a cycle, while an edge into an already-finished subtree is a harmless
//! forward or cross edge. Both detectors start from every unvisited vertex
//! so disconnected graphs are covered, and both use explicit stacks so call
//! depth never tracks path length.

use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, HashSet};

/// Visitation state for directed DFS walks. Absence from the state map is
/// the third state (unvisited).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    InProgress,
    Done,
}

/// Detect whether an undirected graph contains a cycle.
///
/// The edge back to the parent is excused exactly once per vertex: a second
/// adjacency entry for the parent is a parallel edge, which by itself forms
/// a cycle. Self-loops are cycles.
#[tracing::instrument(skip(graph))]
pub fn has_cycle_undirected<V: VertexId>(graph: &Graph<V>) -> bool {
    let mut visited: HashSet<V> = HashSet::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        if component_has_cycle(graph, root, &mut visited) {
            return true;
        }
    }

    false
}

fn component_has_cycle<V: VertexId>(
    graph: &Graph<V>,
    root: &V,
    visited: &mut HashSet<V>,
) -> bool {
    let mut stack: Vec<(V, Option<V>)> = vec![(root.clone(), None)];

    while let Some((v, parent)) = stack.pop() {
        if !visited.insert(v.clone()) {
            // reached along a second distinct edge
            return true;
        }
        let mut parent_edge_spent = false;
        for w in graph.neighbors(&v) {
            if !parent_edge_spent && parent.as_ref() == Some(w) {
                parent_edge_spent = true;
                continue;
            }
            if visited.contains(w) {
                return true;
            }
            stack.push((w.clone(), Some(v.clone())));
        }
    }

    false
}

/// Detect whether a directed graph contains a cycle.
///
/// A neighbor still in progress is an ancestor on the current DFS path, so
/// the edge closes a cycle. A neighbor already done has been fully popped
/// and is a forward or cross edge, not a cycle.
#[tracing::instrument(skip(graph))]
pub fn has_cycle_directed<V: VertexId>(graph: &Graph<V>) -> bool {
    let mut state: HashMap<V, VisitState> = HashMap::new();

    for root in graph.vertices() {
        if state.contains_key(root) {
            continue;
        }
        if walk_finds_back_edge(graph, root, &mut state) {
            return true;
        }
    }

    false
}

/// Iterative DFS over (vertex, next-neighbor-index) frames.
fn walk_finds_back_edge<V: VertexId>(
    graph: &Graph<V>,
    root: &V,
    state: &mut HashMap<V, VisitState>,
) -> bool {
    let mut frames: Vec<(V, usize)> = vec![(root.clone(), 0)];
    state.insert(root.clone(), VisitState::InProgress);

    while let Some((v, index)) = frames.last_mut() {
        let neighbors = graph.neighbors(v);
        if *index >= neighbors.len() {
            state.insert(v.clone(), VisitState::Done);
            frames.pop();
            continue;
        }
        let w = &neighbors[*index];
        *index += 1;

        match state.get(w) {
            Some(VisitState::InProgress) => return true,
            Some(VisitState::Done) => {}
            None => {
                let w = w.clone();
                state.insert(w.clone(), VisitState::InProgress);
                frames.push((w, 0));
            }
        }
    }

    false
}
