use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Depth-first traversal from `start`, recursive variant.
///
/// Visits neighbors in adjacency-list order and returns vertices in
/// visitation order; each reachable vertex appears exactly once and
/// unreachable vertices are absent. Call depth tracks the longest simple
/// path from `start` — prefer [`dfs_iterative`] for deep or degenerate
/// graphs.
#[tracing::instrument(skip(graph), fields(start = ?start))]
pub fn dfs<V: VertexId>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    if !graph.has_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn visit<V: VertexId>(graph: &Graph<V>, v: &V, visited: &mut HashSet<V>, order: &mut Vec<V>) {
    visited.insert(v.clone());
    order.push(v.clone());
    for w in graph.neighbors(v) {
        if !visited.contains(w) {
            visit(graph, w, visited, order);
        }
    }
}

/// Depth-first traversal from `start` using an explicit stack.
///
/// Produces the same visitation order as [`dfs`] — neighbors are pushed in
/// reverse so they pop in adjacency-list order — with memory bounded by the
/// vertex count instead of call-stack depth.
#[tracing::instrument(skip(graph), fields(start = ?start))]
pub fn dfs_iterative<V: VertexId>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    if !graph.has_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<V> = vec![start.clone()];

    while let Some(v) = stack.pop() {
        if !visited.insert(v.clone()) {
            continue;
        }
        for w in graph.neighbors(&v).iter().rev() {
            if !visited.contains(w) {
                stack.push(w.clone());
            }
        }
        order.push(v);
    }

    Ok(order)
}
