use crate::error::{GraphError, Result};
use crate::graph::{VertexId, Weight, WeightedGraph};
use crate::shortest::paths::ShortestPaths;
use crate::trace_time;
use std::time::Instant;

/// Single-source shortest paths tolerating negative edge weights.
///
/// Relaxes every edge `|V| - 1` times — any shortest simple path has at
/// most `|V| - 1` edges, so the bound is exact — stopping early when a full
/// pass improves nothing. One verification pass follows: an edge that still
/// relaxes proves a negative-weight cycle reachable from the source, and
/// the run fails with [`GraphError::NegativeCycle`] instead of returning a
/// meaningless distance map.
#[tracing::instrument(skip(graph), fields(source = ?source, vertices = graph.vertex_count()))]
pub fn bellman_ford<V: VertexId>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> Result<ShortestPaths<V>> {
    if !graph.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let start = Instant::now();
    let mut paths = ShortestPaths::new(source.clone(), graph.vertices());
    let passes = graph.vertex_count().saturating_sub(1);

    for _ in 0..passes {
        if !relax_all(graph, &mut paths) {
            break;
        }
    }

    if would_relax(graph, &paths) {
        tracing::debug!("relaxation pass {} still improved a distance", passes + 1);
        return Err(GraphError::NegativeCycle);
    }

    trace_time!(start, "bellman_ford");
    Ok(paths)
}

/// One relaxation pass over every stored edge, in insertion order.
/// Returns whether any distance improved.
fn relax_all<V: VertexId>(graph: &WeightedGraph<V>, paths: &mut ShortestPaths<V>) -> bool {
    let mut updated = false;

    for (u, v, w) in graph.edges() {
        let from = match paths.distances.get(u) {
            Some(d) if d.is_finite() => *d,
            _ => continue,
        };
        let candidate = from + w;
        let current = paths
            .distances
            .get(v)
            .copied()
            .unwrap_or(Weight::INFINITY);
        if candidate.value() < current.value() {
            paths.distances.insert(v.clone(), candidate);
            paths.predecessors.insert(v.clone(), u.clone());
            updated = true;
        }
    }

    updated
}

/// The verification pass: true when any edge could still relax.
fn would_relax<V: VertexId>(graph: &WeightedGraph<V>, paths: &ShortestPaths<V>) -> bool {
    for (u, v, w) in graph.edges() {
        let from = match paths.distances.get(u) {
            Some(d) if d.is_finite() => *d,
            _ => continue,
        };
        if let Some(current) = paths.distances.get(v) {
            if (from + w).value() < current.value() {
                return true;
            }
        }
    }

    false
}
