use super::*;
use crate::error::GraphError;
use crate::graph::{Graph, TraverseOptions};

fn diamond() -> Graph<u32> {
    // 0 -> 1 -> 3
    // 0 -> 2 -> 3
    let mut g = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(0, 2);
    g.add_edge(1, 3);
    g.add_edge(2, 3);
    g
}

#[test]
fn test_dfs_visits_in_adjacency_order() {
    let g = diamond();
    assert_eq!(dfs(&g, &0).unwrap(), vec![0, 1, 3, 2]);
}

/// Test that the iterative variant matches the recursive visitation order
#[test]
fn test_dfs_iterative_matches_recursive() {
    let g = diamond();
    assert_eq!(dfs(&g, &0).unwrap(), dfs_iterative(&g, &0).unwrap());

    let mut chain: Graph<u32> = Graph::directed();
    for i in 0..50 {
        chain.add_edge(i, i + 1);
        chain.add_edge(i, i + 51);
    }
    assert_eq!(dfs(&chain, &0).unwrap(), dfs_iterative(&chain, &0).unwrap());
}

#[test]
fn test_dfs_single_source_only() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_vertex(9);

    let order = dfs(&g, &0).unwrap();
    assert_eq!(order, vec![0, 1]);
    assert!(!order.contains(&9));
}

#[test]
fn test_dfs_missing_start_is_error() {
    let g: Graph<u32> = Graph::directed();
    assert!(matches!(
        dfs(&g, &0),
        Err(GraphError::VertexNotFound { .. })
    ));
    assert!(matches!(
        dfs_iterative(&g, &0),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn test_dfs_tolerates_cycles() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 0);

    assert_eq!(dfs(&g, &0).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_bfs_level_order() {
    let g = diamond();
    assert_eq!(bfs(&g, &0).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_each_vertex_once_despite_parallel_edges() {
    let mut g: Graph<u32> = Graph::undirected();
    g.add_edge(0, 1);
    g.add_edge(0, 1);
    g.add_edge(1, 2);

    assert_eq!(bfs(&g, &0).unwrap(), vec![0, 1, 2]);
}

/// Test that a depth limit cuts the walk and flags truncation
#[test]
fn test_bfs_with_options_max_depth() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);

    let opts = TraverseOptions {
        max_depth: Some(1),
        ..Default::default()
    };
    let result = bfs_with_options(&g, &0, &opts).unwrap();

    assert_eq!(result.order, vec![0, 1]);
    assert!(result.truncated);
}

#[test]
fn test_bfs_with_options_max_nodes() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(0, 2);
    g.add_edge(0, 3);

    let opts = TraverseOptions {
        max_nodes: Some(2),
        ..Default::default()
    };
    let result = bfs_with_options(&g, &0, &opts).unwrap();

    assert_eq!(result.order.len(), 2);
    assert!(result.truncated);
}

#[test]
fn test_bfs_unbounded_walk_not_truncated() {
    let g = diamond();
    let result = bfs_with_options(&g, &0, &TraverseOptions::default()).unwrap();

    assert_eq!(result.order.len(), 4);
    assert!(!result.truncated);
}

/// Test that a depth limit exactly covering the graph does not flag truncation
#[test]
fn test_bfs_depth_limit_at_frontier_not_truncated() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(1, 2);

    let opts = TraverseOptions {
        max_depth: Some(2),
        ..Default::default()
    };
    let result = bfs_with_options(&g, &0, &opts).unwrap();

    assert_eq!(result.order, vec![0, 1, 2]);
    assert!(!result.truncated);
}

#[test]
fn test_shortest_path_unweighted_minimizes_hops() {
    let mut g: Graph<u32> = Graph::undirected();
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 4);
    g.add_edge(0, 3);
    g.add_edge(3, 4);

    let path = shortest_path_unweighted(&g, &0, &4).unwrap();
    assert_eq!(path, vec![0, 3, 4]);
}

#[test]
fn test_shortest_path_unweighted_unreachable_is_empty() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_edge(0, 1);
    g.add_edge(2, 3);

    assert!(shortest_path_unweighted(&g, &0, &3).unwrap().is_empty());
}

#[test]
fn test_shortest_path_unweighted_start_equals_end() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_vertex(0);

    assert_eq!(shortest_path_unweighted(&g, &0, &0).unwrap(), vec![0]);
}

#[test]
fn test_shortest_path_unweighted_missing_endpoint_is_error() {
    let mut g: Graph<u32> = Graph::directed();
    g.add_vertex(0);

    assert!(matches!(
        shortest_path_unweighted(&g, &0, &9),
        Err(GraphError::VertexNotFound { .. })
    ));
}

/// Test traversal over string vertex ids
#[test]
fn test_traversal_generic_over_vertex_type() {
    let mut g: Graph<String> = Graph::undirected();
    g.add_edge("alpha".to_string(), "beta".to_string());
    g.add_edge("beta".to_string(), "gamma".to_string());

    let order = bfs(&g, &"alpha".to_string()).unwrap();
    assert_eq!(order.len(), 3);
    assert_eq!(order[0], "alpha");
}
