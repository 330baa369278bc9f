//! Topological sorting over directed acyclic graphs
//!
//! Two independent implementations: Kahn's in-degree/queue algorithm and a
//! DFS-postorder sort. Both reject cyclic input with
//! [`GraphError::CycleDetected`], so an empty order is only ever an empty
//! graph, never an undetected cycle.

use crate::cycle::VisitState;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, VecDeque};

/// Kahn's algorithm: repeatedly emit a vertex with no remaining incoming
/// edges, decrementing the in-degree of its out-neighbors.
///
/// Seeding and bookkeeping follow vertex insertion order, so the result is
/// deterministic for a given construction sequence. When the emitted order
/// is shorter than the vertex count, the leftover vertices all sit on
/// cycles and the input is rejected.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topo_sort_kahn<V: VertexId>(graph: &Graph<V>) -> Result<Vec<V>> {
    let mut in_degree: HashMap<V, usize> = graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), 0))
        .collect();
    for v in graph.vertices() {
        for w in graph.neighbors(v) {
            if let Some(count) = in_degree.get_mut(w) {
                *count += 1;
            }
        }
    }

    let mut queue: VecDeque<V> = graph
        .vertices()
        .iter()
        .filter(|v| in_degree.get(*v) == Some(&0))
        .cloned()
        .collect();

    let mut order: Vec<V> = Vec::with_capacity(graph.vertex_count());
    while let Some(v) = queue.pop_front() {
        for w in graph.neighbors(&v) {
            if let Some(count) = in_degree.get_mut(w) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(w.clone());
                }
            }
        }
        order.push(v);
    }

    if order.len() < graph.vertex_count() {
        tracing::debug!(
            emitted = order.len(),
            vertices = graph.vertex_count(),
            "kahn left vertices with nonzero in-degree"
        );
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

/// DFS-postorder sort: a vertex is emitted only after all of its
/// descendants, so the reversed postorder is a valid topological order.
///
/// The coloring that drives the walk already distinguishes in-progress
/// from finished vertices, so a back-edge (cycle) is detected along the
/// way instead of leaving cyclic input undefined.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topo_sort_dfs<V: VertexId>(graph: &Graph<V>) -> Result<Vec<V>> {
    let mut state: HashMap<V, VisitState> = HashMap::new();
    let mut postorder: Vec<V> = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if state.contains_key(root) {
            continue;
        }
        push_postorder(graph, root, &mut state, &mut postorder)?;
    }

    postorder.reverse();
    Ok(postorder)
}

/// Iterative DFS appending each vertex once its whole subtree is done.
fn push_postorder<V: VertexId>(
    graph: &Graph<V>,
    root: &V,
    state: &mut HashMap<V, VisitState>,
    postorder: &mut Vec<V>,
) -> Result<()> {
    let mut frames: Vec<(V, usize)> = vec![(root.clone(), 0)];
    state.insert(root.clone(), VisitState::InProgress);

    while let Some((v, index)) = frames.last_mut() {
        let neighbors = graph.neighbors(v);
        if *index >= neighbors.len() {
            state.insert(v.clone(), VisitState::Done);
            postorder.push(v.clone());
            frames.pop();
            continue;
        }
        let w = &neighbors[*index];
        *index += 1;

        match state.get(w) {
            Some(VisitState::InProgress) => return Err(GraphError::CycleDetected),
            Some(VisitState::Done) => {}
            None => {
                let w = w.clone();
                state.insert(w.clone(), VisitState::InProgress);
                frames.push((w, 0));
            }
        }
    }

    Ok(())
}
