//! End-to-end scenarios through the public API.
//!
//! Each test builds a small graph the way a collaborator would (by replaying
//! `add_vertex`/`add_edge`) and checks one documented outcome.

use graphlens::algorithms::{
    bellman_ford, detect_communities, dijkstra, directed_cycles, find_bridges, find_cycles,
    leader_rank_default, minimum_spanning_tree, modularity, strongly_connected_components,
    undirected_cycles,
};
use graphlens::config::CommunityConfig;
use graphlens::{Edge, Graph, GraphKind, VertexId};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

/// Triangle where the two short edges beat the direct one.
#[fixture]
fn weighted_triangle() -> Graph {
    Graph::from_edges(GraphKind::Undirected, [(1, 2, 1), (2, 3, 2), (1, 3, 10)])
}

/// Two directed 4-cycles joined by a single edge 3 -> 5.
#[fixture]
fn joined_cycles() -> Graph {
    Graph::from_edges(
        GraphKind::Directed,
        [
            (1, 2, 0),
            (2, 3, 0),
            (3, 4, 0),
            (4, 1, 0),
            (5, 6, 0),
            (6, 7, 0),
            (7, 8, 0),
            (8, 5, 0),
            (3, 5, 0),
        ],
    )
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[rstest]
fn shortest_path_avoids_heavy_edge(weighted_triangle: Graph) {
    assert_eq!(dijkstra(&weighted_triangle, 1, 3), Some(vec![1, 2, 3]));
    assert_eq!(bellman_ford(&weighted_triangle, 1, 3), Some(vec![1, 2, 3]));
}

#[test]
fn directed_triangle_has_one_cycle() {
    let graph = Graph::from_edges(GraphKind::Directed, [(1, 2, 0), (2, 3, 0), (3, 1, 0)]);

    assert_eq!(directed_cycles(&graph, 1), vec![vec![1, 2, 3]]);
    assert_eq!(find_cycles(&graph, 1), vec![vec![1, 2, 3]]);
}

#[rstest]
fn joined_cycles_form_two_components(joined_cycles: Graph) {
    let mut components = strongly_connected_components(&joined_cycles);
    for component in &mut components {
        component.sort_unstable();
    }
    components.sort();

    assert_eq!(components, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
}

#[test]
fn isolated_vertex_has_minimum_rank() {
    let mut graph = Graph::undirected();
    for (from, to) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
        graph.add_edge(from, to, 0);
    }
    graph.add_vertex(6);

    let ranks = leader_rank_default(&graph);
    let minimum = ranks
        .iter()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(&vertex, _)| vertex);

    assert_eq!(minimum, Some(6));
}

#[test]
fn spanning_tree_drops_heaviest_cycle_edge() {
    let graph = Graph::from_edges(
        GraphKind::Undirected,
        [(1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 1, 4)],
    );
    let tree = minimum_spanning_tree(&graph);

    assert_eq!(tree.len(), 3);
    assert!(!tree.contains(&Edge::new(4, 1, 4)));
}

// =============================================================================
// Result conventions
// =============================================================================

#[rstest]
#[case::missing_start(99, 3, None)]
#[case::missing_end(1, 99, None)]
#[case::trivial(2, 2, Some(vec![2]))]
fn path_result_conventions(
    weighted_triangle: Graph,
    #[case] start: VertexId,
    #[case] end: VertexId,
    #[case] expected: Option<Vec<VertexId>>,
) {
    assert_eq!(dijkstra(&weighted_triangle, start, end), expected);
    assert_eq!(bellman_ford(&weighted_triangle, start, end), expected);
}

#[rstest]
fn unreachable_end_is_an_empty_dijkstra_path(mut weighted_triangle: Graph) {
    weighted_triangle.add_vertex(4);

    assert_eq!(dijkstra(&weighted_triangle, 1, 4), Some(vec![]));
}

#[rstest]
fn trivial_path_ignores_connectivity(mut weighted_triangle: Graph) {
    weighted_triangle.add_vertex(4);

    assert_eq!(dijkstra(&weighted_triangle, 4, 4), Some(vec![4]));
}

#[rstest]
fn wrong_graph_kind_yields_empty_results(joined_cycles: Graph, weighted_triangle: Graph) {
    assert!(find_bridges(&joined_cycles).is_empty());
    assert!(minimum_spanning_tree(&joined_cycles).is_empty());
    assert!(detect_communities(&joined_cycles, &CommunityConfig::default()).is_empty());
    assert!(strongly_connected_components(&weighted_triangle).is_empty());
    assert!(undirected_cycles(&joined_cycles, 1).is_empty());
    assert!(directed_cycles(&weighted_triangle, 1).is_empty());
}

// =============================================================================
// Mutation between calls
// =============================================================================

#[rstest]
fn results_follow_graph_mutations(mut weighted_triangle: Graph) {
    assert_eq!(undirected_cycles(&weighted_triangle, 1), vec![vec![1, 2, 3]]);
    assert!(find_bridges(&weighted_triangle).is_empty());

    weighted_triangle.add_edge(3, 4, 1);

    assert_eq!(find_bridges(&weighted_triangle), vec![Edge::new(3, 4, 1)]);
    assert_eq!(dijkstra(&weighted_triangle, 1, 4), Some(vec![1, 2, 3, 4]));
}

#[test]
fn communities_beat_singletons_on_barbell() {
    let graph = Graph::from_edges(
        GraphKind::Undirected,
        [
            (1, 2, 1),
            (2, 3, 1),
            (3, 1, 1),
            (4, 5, 1),
            (5, 6, 1),
            (6, 4, 1),
            (3, 4, 1),
        ],
    );
    let singletons: std::collections::HashMap<VertexId, VertexId> =
        graph.vertices().map(|vertex| (vertex, vertex)).collect();

    let partition = detect_communities(&graph, &CommunityConfig::seeded(2024));

    assert_eq!(partition.len(), 6);
    assert!(modularity(&graph, &partition, 1.0) > modularity(&graph, &singletons, 1.0));
}
