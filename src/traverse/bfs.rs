use crate::error::{GraphError, Result};
use crate::graph::{Graph, Traversal, TraverseOptions, VertexId};
use std::collections::{HashSet, VecDeque};

/// State tracked during a breadth-first walk
struct BfsState<V> {
    visited: HashSet<V>,
    queue: VecDeque<(V, usize)>,
    order: Vec<V>,
    truncated: bool,
}

impl<V: VertexId> BfsState<V> {
    fn new(start: &V) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back((start.clone(), 0));
        Self {
            visited,
            queue,
            order: Vec::new(),
            truncated: false,
        }
    }
}

/// Breadth-first traversal from `start`.
///
/// Visits vertices level by level, in non-decreasing hop distance from
/// `start`; same reachability guarantee as DFS, different order.
#[tracing::instrument(skip(graph), fields(start = ?start))]
pub fn bfs<V: VertexId>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    bfs_with_options(graph, start, &TraverseOptions::default()).map(|t| t.order)
}

/// Breadth-first walk bounded by [`TraverseOptions`].
///
/// The result is marked truncated when a depth or node limit stopped the
/// walk short of the reachable set.
#[tracing::instrument(
    skip(graph, opts),
    fields(start = ?start, max_depth = ?opts.max_depth, max_nodes = ?opts.max_nodes)
)]
pub fn bfs_with_options<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    opts: &TraverseOptions,
) -> Result<Traversal<V>> {
    if !graph.has_vertex(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut state = BfsState::new(start);

    while let Some((current, depth)) = state.queue.pop_front() {
        state.order.push(current.clone());

        // Handle max_depth reached
        if let Some(max) = opts.max_depth {
            if depth >= max {
                let unexpanded = graph
                    .neighbors(&current)
                    .iter()
                    .any(|w| !state.visited.contains(w));
                if unexpanded {
                    state.truncated = true;
                }
                continue;
            }
        }

        for w in graph.neighbors(&current) {
            if state.visited.contains(w) {
                continue;
            }
            if let Some(max) = opts.max_nodes {
                if state.visited.len() >= max {
                    state.truncated = true;
                    break;
                }
            }
            state.visited.insert(w.clone());
            state.queue.push_back((w.clone(), depth + 1));
        }
    }

    Ok(Traversal {
        order: state.order,
        truncated: state.truncated,
    })
}
