//! LeaderRank centrality.
//!
//! LeaderRank adds one virtual ground vertex linked to every real vertex so
//! leaves and sinks keep passing rank along. Each iteration a vertex with
//! degree `d` sends `rank / (d + 1)` to each successor and the same share to
//! the ground vertex; the ground's rank from the previous iteration is spread
//! evenly over all real vertices. After convergence the ground's last share
//! is folded back in once more, so the ranks sum to the vertex count.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::adjacency::AdjacencyIndex;
use crate::config::LeaderRankConfig;
use crate::model::{Graph, VertexId};

/// LeaderRank with default parameters.
#[must_use]
pub fn leader_rank_default(graph: &Graph) -> HashMap<VertexId, f64> {
    leader_rank(graph, &LeaderRankConfig::default())
}

/// Compute LeaderRank scores for every vertex.
///
/// An empty graph yields an empty map; a graph with no edges ranks every
/// vertex `1.0`. Iteration stops when the largest per-vertex change drops
/// below `config.epsilon`, or after `config.max_iterations`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn leader_rank(graph: &Graph, config: &LeaderRankConfig) -> HashMap<VertexId, f64> {
    if graph.is_empty() {
        return HashMap::new();
    }
    if graph.edge_count() == 0 {
        return graph.vertices().map(|vertex| (vertex, 1.0)).collect();
    }

    let adjacency = AdjacencyIndex::build(graph);
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let vertex_count = vertices.len() as f64;

    let mut ranks: HashMap<VertexId, f64> =
        vertices.iter().map(|&vertex| (vertex, 1.0)).collect();
    let mut ground = 0.0_f64;
    let mut iterations = 0u32;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;
        let previous_ground = ground;
        ground = 0.0;
        let ground_share = previous_ground / vertex_count;
        let mut next: HashMap<VertexId, f64> =
            vertices.iter().map(|&vertex| (vertex, ground_share)).collect();

        for &vertex in &vertices {
            let share = ranks[&vertex] / (adjacency.degree(vertex) + 1) as f64;
            for successor in adjacency.successors(vertex) {
                if let Some(rank) = next.get_mut(successor) {
                    *rank += share;
                }
            }
            ground += share;
        }

        let max_delta = vertices
            .iter()
            .map(|vertex| (ranks[vertex] - next[vertex]).abs())
            .fold(0.0_f64, f64::max);
        ranks = next;

        if max_delta < config.epsilon {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "LeaderRank converged");
    } else {
        warn!(
            iterations,
            epsilon = config.epsilon,
            "LeaderRank hit its iteration cap before converging"
        );
    }

    let ground_share = ground / vertex_count;
    for rank in ranks.values_mut() {
        *rank += ground_share;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphKind;

    const TOLERANCE: f64 = 1e-3;

    fn total(ranks: &HashMap<VertexId, f64>) -> f64 {
        ranks.values().sum()
    }

    fn argmax(ranks: &HashMap<VertexId, f64>) -> VertexId {
        ranks
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&vertex, _)| vertex)
            .expect("ranks should not be empty")
    }

    fn graph(kind: GraphKind, edges: &[(VertexId, VertexId)]) -> Graph {
        Graph::from_edges(kind, edges.iter().map(|&(u, v)| (u, v, 0)))
    }

    #[test]
    fn empty_graph_has_no_ranks() {
        assert!(leader_rank_default(&Graph::directed()).is_empty());
    }

    #[test]
    fn edgeless_graph_ranks_everyone_one() {
        let mut graph = Graph::directed();
        for vertex in 1..=5 {
            graph.add_vertex(vertex);
        }
        let ranks = leader_rank_default(&graph);

        assert_eq!(ranks.len(), 5);
        assert!(ranks.values().all(|&rank| (rank - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn directed_edge_favors_target() {
        let ranks = leader_rank_default(&graph(GraphKind::Directed, &[(1, 2)]));

        assert!(ranks[&2] > ranks[&1]);
        assert!((total(&ranks) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn undirected_edge_is_balanced() {
        let ranks = leader_rank_default(&graph(GraphKind::Undirected, &[(1, 2)]));

        assert!((ranks[&1] - ranks[&2]).abs() < TOLERANCE);
    }

    #[test]
    fn rings_rank_uniformly() {
        let ring = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)];
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            let ranks = leader_rank_default(&graph(kind, &ring));

            assert!((total(&ranks) - 5.0).abs() < TOLERANCE);
            for rank in ranks.values() {
                assert!((rank - 1.0).abs() < TOLERANCE, "{kind}: rank {rank}");
            }
        }
    }

    #[test]
    fn directed_chain_peaks_at_sink() {
        let chain = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)];
        let ranks = leader_rank_default(&graph(GraphKind::Directed, &chain));

        assert_eq!(argmax(&ranks), 7);
        assert!((total(&ranks) - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn star_center_ranks_highest() {
        let star = [(1, 2), (1, 3), (1, 4), (1, 5), (1, 6)];
        let ranks = leader_rank_default(&graph(GraphKind::Undirected, &star));

        assert_eq!(argmax(&ranks), 1);
    }

    #[test]
    fn isolated_vertex_ranks_lowest() {
        let mut g = graph(GraphKind::Undirected, &[(1, 2), (2, 3), (3, 4), (4, 5)]);
        g.add_vertex(6);
        let ranks = leader_rank_default(&g);

        let isolated = ranks[&6];
        assert!(ranks.iter().all(|(&v, &rank)| v == 6 || rank > isolated));
        assert!((total(&ranks) - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn iteration_cap_still_returns_every_vertex() {
        let config = LeaderRankConfig {
            max_iterations: 1,
            ..LeaderRankConfig::default()
        };
        let ranks = leader_rank(&graph(GraphKind::Directed, &[(1, 2), (2, 3)]), &config);

        assert_eq!(ranks.len(), 3);
        assert!((total(&ranks) - 3.0).abs() < TOLERANCE);
    }
}
