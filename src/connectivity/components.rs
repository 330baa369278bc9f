use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Count connected components by iterative DFS from every unvisited
/// vertex, in insertion order.
///
/// Implemented without [`super::UnionFind`] so the two connectivity
/// mechanisms stay independent. Intended for undirected graphs; on a
/// directed graph the count reflects how many out-edge walks are needed to
/// cover the vertex set from insertion-ordered roots, not strong
/// connectivity.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn count_components<V: VertexId>(graph: &Graph<V>) -> usize {
    let mut visited: HashSet<V> = HashSet::new();
    let mut components = 0;

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        components += 1;

        let mut stack: Vec<V> = vec![root.clone()];
        while let Some(v) = stack.pop() {
            if !visited.insert(v.clone()) {
                continue;
            }
            for w in graph.neighbors(&v) {
                if !visited.contains(w) {
                    stack.push(w.clone());
                }
            }
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_has_zero_components() {
        let g: Graph<u32> = Graph::undirected();
        assert_eq!(count_components(&g), 0);
    }

    #[test]
    fn test_connected_graph_is_one_component() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        g.add_edge(3, 4);

        assert_eq!(count_components(&g), 1);
    }

    #[test]
    fn test_disconnected_pieces_counted() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        g.add_vertex(9);

        assert_eq!(count_components(&g), 3);
    }

    /// Test that self-loops and parallel edges do not affect the count
    #[test]
    fn test_multigraph_edges_do_not_split_components() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        g.add_edge(1, 1);

        assert_eq!(count_components(&g), 1);
    }
}
