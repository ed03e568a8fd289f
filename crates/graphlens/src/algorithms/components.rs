//! Strongly connected components by Kosaraju's two-pass algorithm.

use std::collections::HashSet;

use tracing::debug;

use crate::adjacency::AdjacencyIndex;
use crate::model::{Graph, VertexId};

/// Partition a directed graph into strongly connected components.
///
/// The first pass records DFS finishing order over every vertex; the second
/// pass walks the edge-reversed graph in reverse finishing order, and each
/// tree it grows is one component. Every vertex appears in exactly one
/// component. No ordering between or within components is promised.
///
/// Undirected graphs yield an empty list.
#[must_use]
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    if !graph.is_directed() {
        return Vec::new();
    }

    let forward = AdjacencyIndex::build(graph);
    let order = finishing_order(graph, &forward);

    let reversed = AdjacencyIndex::transposed(graph);
    let mut assigned: HashSet<VertexId> = HashSet::with_capacity(graph.size());
    let mut components = Vec::new();

    for &root in order.iter().rev() {
        if !assigned.insert(root) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            component.push(vertex);
            for &next in reversed.successors(vertex) {
                if assigned.insert(next) {
                    stack.push(next);
                }
            }
        }
        components.push(component);
    }

    debug!(
        vertex_count = graph.size(),
        component_count = components.len(),
        "Computed strongly connected components"
    );
    components
}

/// Post-order of an iterative DFS covering all vertices.
fn finishing_order(graph: &Graph, adjacency: &AdjacencyIndex) -> Vec<VertexId> {
    let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.size());
    let mut order = Vec::with_capacity(graph.size());
    let mut frames: Vec<(VertexId, usize)> = Vec::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        frames.push((root, 0));
        while let Some(&(vertex, cursor)) = frames.last() {
            match adjacency.successors(vertex).get(cursor) {
                Some(&next) => {
                    if let Some(top) = frames.last_mut() {
                        top.1 += 1;
                    }
                    if visited.insert(next) {
                        frames.push((next, 0));
                    }
                }
                None => {
                    frames.pop();
                    order.push(vertex);
                }
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphKind;

    fn directed(edges: &[(VertexId, VertexId)]) -> Graph {
        Graph::from_edges(GraphKind::Directed, edges.iter().map(|&(u, v)| (u, v, 0)))
    }

    /// Components as sorted member lists, sorted by first member.
    fn canonical(mut components: Vec<Vec<VertexId>>) -> Vec<Vec<VertexId>> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn empty_graph_has_no_components() {
        assert!(strongly_connected_components(&Graph::directed()).is_empty());
    }

    #[test]
    fn single_vertex_is_its_own_component() {
        let mut graph = Graph::directed();
        graph.add_vertex(1);

        assert_eq!(strongly_connected_components(&graph), vec![vec![1]]);
    }

    #[test]
    fn chain_splits_into_singletons() {
        let graph = directed(&[(1, 2), (2, 3)]);

        assert_eq!(
            canonical(strongly_connected_components(&graph)),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn two_cycles_joined_one_way_stay_separate() {
        let graph = directed(&[
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 1),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 5),
            (3, 5),
        ]);

        assert_eq!(
            canonical(strongly_connected_components(&graph)),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]
        );
    }

    #[test]
    fn cycle_with_isolated_vertex() {
        let mut graph = directed(&[(1, 2), (2, 3), (3, 1)]);
        graph.add_vertex(4);

        assert_eq!(
            canonical(strongly_connected_components(&graph)),
            vec![vec![1, 2, 3], vec![4]]
        );
    }

    #[test]
    fn undirected_graph_yields_nothing() {
        let graph = Graph::from_edges(GraphKind::Undirected, [(1, 2, 0)]);

        assert!(strongly_connected_components(&graph).is_empty());
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let edges: Vec<(VertexId, VertexId)> = (0..100_000).map(|i| (i, i + 1)).collect();
        let graph = directed(&edges);

        assert_eq!(strongly_connected_components(&graph).len(), 100_001);
    }
}
