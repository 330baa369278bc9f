use crate::error::{GraphError, Result};
use crate::graph::{VertexId, Weight, WeightedGraph};
use crate::shortest::paths::ShortestPaths;
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
struct HeapEntry<V> {
    vertex: V,
    accumulated_cost: Weight,
}

impl<V: VertexId> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
            && self.accumulated_cost.value() == other.accumulated_cost.value()
    }
}

impl<V: VertexId> Eq for HeapEntry<V> {}

impl<V: VertexId> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// Rejects any negative edge weight up front with
/// [`GraphError::NegativeWeight`] — a deliberate strengthening of the usual
/// caller-only contract, since a negative edge silently invalidates the
/// finalization invariant (once a vertex is extracted its distance never
/// improves again). Decrease-key is lazy: improved distances are pushed as
/// fresh heap entries and stale ones are skipped on pop.
#[tracing::instrument(skip(graph), fields(source = ?source, vertices = graph.vertex_count()))]
pub fn dijkstra<V: VertexId>(graph: &WeightedGraph<V>, source: &V) -> Result<ShortestPaths<V>> {
    if !graph.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }
    reject_negative_weights(graph)?;

    let start = Instant::now();
    let paths = run(graph, source, None);
    trace_time!(start, "dijkstra");
    Ok(paths)
}

/// Shortest path between one pair of vertices.
///
/// Runs the same loop as [`dijkstra`] but stops as soon as `to` is
/// finalized; at that point its distance is exact. Returns the path and
/// its total weight, or None when `to` is unreachable from `from`.
#[tracing::instrument(skip(graph), fields(from = ?from, to = ?to))]
pub fn dijkstra_path<V: VertexId>(
    graph: &WeightedGraph<V>,
    from: &V,
    to: &V,
) -> Result<Option<(Vec<V>, Weight)>> {
    if !graph.has_vertex(from) {
        return Err(GraphError::vertex_not_found(from));
    }
    if !graph.has_vertex(to) {
        return Err(GraphError::vertex_not_found(to));
    }
    reject_negative_weights(graph)?;

    let paths = run(graph, from, Some(to));
    match (paths.path_to(to), paths.distance(to)) {
        (Some(path), Some(cost)) => Ok(Some((path, cost))),
        _ => Ok(None),
    }
}

/// Main Dijkstra loop, optionally stopping once `target` is extracted.
fn run<V: VertexId>(graph: &WeightedGraph<V>, source: &V, target: Option<&V>) -> ShortestPaths<V> {
    let mut paths = ShortestPaths::new(source.clone(), graph.vertices());
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: source.clone(),
        accumulated_cost: Weight::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        vertex,
        accumulated_cost,
    })) = heap.pop()
    {
        // Stale entry left behind by a lazy decrease-key re-insertion
        if let Some(best) = paths.distances.get(&vertex) {
            if accumulated_cost.value() > best.value() {
                continue;
            }
        }

        if target == Some(&vertex) {
            break;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            let candidate = accumulated_cost + *weight;
            let current = paths
                .distances
                .get(neighbor)
                .copied()
                .unwrap_or(Weight::INFINITY);
            if candidate.value() < current.value() {
                paths.distances.insert(neighbor.clone(), candidate);
                paths.predecessors.insert(neighbor.clone(), vertex.clone());
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.clone(),
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    paths
}

fn reject_negative_weights<V: VertexId>(graph: &WeightedGraph<V>) -> Result<()> {
    for (u, v, w) in graph.edges() {
        if w.is_negative() {
            return Err(GraphError::negative_weight(u, v, w.value()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test HeapEntry comparison ordering
    #[test]
    fn test_heap_entry_ordering() {
        let entry1 = HeapEntry {
            vertex: 1u32,
            accumulated_cost: Weight::new(1.0),
        };
        let entry2 = HeapEntry {
            vertex: 2u32,
            accumulated_cost: Weight::new(2.0),
        };
        let entry3 = HeapEntry {
            vertex: 3u32,
            accumulated_cost: Weight::new(1.0),
        };

        // Lower cost compares as less (normal ordering, Reverse-wrapped later)
        assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
        assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

        // Equal costs with different vertices
        assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Equal);
        assert_ne!(entry1, entry3);
    }

    #[test]
    fn test_dijkstra_weighted_diamond() {
        let mut g: WeightedGraph<u32> = WeightedGraph::undirected();
        g.add_edge(0, 1, 4.0);
        g.add_edge(0, 2, 1.0);
        g.add_edge(2, 1, 2.0);
        g.add_edge(1, 3, 1.0);
        g.add_edge(2, 3, 5.0);

        let paths = dijkstra(&g, &0).unwrap();
        assert_eq!(paths.distance(&0), Some(Weight::ZERO));
        assert_eq!(paths.distance(&1).map(|w| w.value()), Some(3.0));
        assert_eq!(paths.distance(&2).map(|w| w.value()), Some(1.0));
        assert_eq!(paths.distance(&3).map(|w| w.value()), Some(4.0));
    }

    #[test]
    fn test_dijkstra_unreachable_vertex_infinite() {
        let mut g: WeightedGraph<u32> = WeightedGraph::directed();
        g.add_edge(0, 1, 1.0);
        g.add_vertex(5);

        let paths = dijkstra(&g, &0).unwrap();
        assert!(!paths.is_reachable(&5));
        assert_eq!(paths.path_to(&5), None);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let mut g: WeightedGraph<u32> = WeightedGraph::directed();
        g.add_edge(0, 1, 2.0);
        g.add_edge(1, 2, -1.0);

        assert!(matches!(
            dijkstra(&g, &0),
            Err(GraphError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_dijkstra_missing_source_is_error() {
        let g: WeightedGraph<u32> = WeightedGraph::directed();
        assert!(matches!(
            dijkstra(&g, &0),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    /// Test that a cheaper multi-hop route beats a direct edge
    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let mut g: WeightedGraph<&str> = WeightedGraph::directed();
        g.add_edge("a", "b", 10.0);
        g.add_edge("a", "c", 1.0);
        g.add_edge("c", "b", 2.0);

        let paths = dijkstra(&g, &"a").unwrap();
        assert_eq!(paths.distance(&"b").map(|w| w.value()), Some(3.0));
        assert_eq!(paths.path_to(&"b"), Some(vec!["a", "c", "b"]));
    }

    #[test]
    fn test_dijkstra_path_returns_route_and_cost() {
        let mut g: WeightedGraph<u32> = WeightedGraph::undirected();
        g.add_edge(0, 1, 4.0);
        g.add_edge(0, 2, 1.0);
        g.add_edge(2, 1, 2.0);

        let (path, cost) = dijkstra_path(&g, &0, &1).unwrap().expect("reachable");
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(cost.value(), 3.0);
    }

    #[test]
    fn test_dijkstra_path_unreachable_is_none() {
        let mut g: WeightedGraph<u32> = WeightedGraph::directed();
        g.add_edge(0, 1, 1.0);
        g.add_vertex(9);

        assert_eq!(dijkstra_path(&g, &0, &9).unwrap(), None);
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let mut g: WeightedGraph<u32> = WeightedGraph::directed();
        g.add_edge(0, 1, 0.0);
        g.add_edge(1, 2, 0.0);

        let paths = dijkstra(&g, &0).unwrap();
        assert_eq!(paths.distance(&2), Some(Weight::ZERO));
    }

    /// Test that parallel edges resolve to the cheapest entry
    #[test]
    fn test_dijkstra_parallel_edges_take_minimum() {
        let mut g: WeightedGraph<u32> = WeightedGraph::directed();
        g.add_edge(0, 1, 5.0);
        g.add_edge(0, 1, 2.0);

        let paths = dijkstra(&g, &0).unwrap();
        assert_eq!(paths.distance(&1).map(|w| w.value()), Some(2.0));
    }
}
